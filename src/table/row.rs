use serde::Deserialize;

/// One city's statistics as read from the input. Fields deserialize by position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    pub city: String,
    pub population: u64,
    pub area: u64,
    pub density: u64,
    pub country: String,
}

/// A raw row together with its density as a percentage of the table maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRow {
    pub row: RawRow,
    pub percentage: u32,
}

/// The processor's row sequence, before or after annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rows {
    Raw(Vec<RawRow>),
    Annotated(Vec<AnnotatedRow>),
}

impl Rows {
    pub fn len(&self) -> usize {
        match self {
            Rows::Raw(rows) => rows.len(),
            Rows::Annotated(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_annotated(&self) -> bool {
        matches!(self, Rows::Annotated(_))
    }

    /// Underlying raw rows in current order.
    pub fn raw(&self) -> Box<dyn Iterator<Item = &RawRow> + '_> {
        match self {
            Rows::Raw(rows) => Box::new(rows.iter()),
            Rows::Annotated(rows) => Box::new(rows.iter().map(|a| &a.row)),
        }
    }
}

impl Default for Rows {
    fn default() -> Self {
        Rows::Raw(Vec::new())
    }
}
