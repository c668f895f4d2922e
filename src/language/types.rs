//! Types representing the syntax tree of an lmy file

use serde::Serialize;

/// The result of parsing one input: the definitions in the order they appear.
#[derive(Eq, Debug, PartialEq, Default, Serialize)]
pub struct Document<'i> {
    pub definitions: Vec<Definition<'i>>,
}

impl<'i> Document<'i> {
    pub fn len(&self) -> usize {
        self.definitions
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions
            .is_empty()
    }
}

#[derive(Eq, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Definition<'i> {
    // [WORKSPACE]
    Section {
        name: Identifier<'i>,
    },
    // server::
    ScopeEntry {
        name: Identifier<'i>,
    },
    // ::
    ScopeReturn,
    // verify::mauve/config
    Verify {
        path: Path<'i>,
    },
    // import vite::{defineConfig}
    Import {
        path: Path<'i>,
        names: Vec<Identifier<'i>>,
    },
    // name: orlaya
    Assignment {
        key: Identifier<'i>,
        value: Option<Value<'i>>,
    },
    // -- coreWorkspace
    ListItem {
        value: Value<'i>,
    },
}

/// A compound name such as `name` or `aft:dev`.
#[derive(Eq, Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Identifier<'i>(pub &'i str);

/// The target of an import or verify statement, such as `@scope/package`.
#[derive(Eq, Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Path<'i>(pub &'i str);

#[derive(Eq, Debug, PartialEq, Serialize)]
pub enum Value<'i> {
    /// contents between the quotes, which are not included
    String(&'i str),
    Boolean(bool),
    Version(Vec<u64>),
    Number(u64),
    PathValue(&'i str),
    Identifier(&'i str),
    RawValue(&'i str),
}
