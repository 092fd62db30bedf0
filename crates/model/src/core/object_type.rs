use lazy_static::lazy_static;
use std::{collections::HashMap, fmt};

/// Object type as written by the filesystem into an entry's `type` attribute.
///
/// The tags follow `sys.objects.type` with two additions for objects that
/// have no catalog type of their own: `$H` (schema) and `$L` (column).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Schema,
    Column,
    UserType,

    InternalTable,
    SystemTable,
    TableType,
    UserTable,
    View,

    AggregateFunction,
    CheckConstraint,
    DefaultConstraint,
    ForeignKey,
    ScalarFunction,
    ClrScalarFunction,
    ClrTableFunction,
    InlineTableFunction,
    Procedure,
    ClrProcedure,
    PlanGuide,
    PrimaryKey,
    ReplicationFilterProcedure,
    Synonym,
    Sequence,
    ServiceQueue,
    ClrTrigger,
    Trigger,
    TableFunction,
    UniqueConstraint,
    ExtendedProcedure,

    /// A tag outside the known catalogue.
    Other(String),
}

lazy_static! {
    static ref TAG_MAP: HashMap<&'static str, ObjectType> = build_tag_map();
}

impl ObjectType {
    /// Decodes a raw attribute value. Trailing NULs and whitespace are not part
    /// of the tag; unknown tags decode to [`ObjectType::Other`].
    pub fn from_tag(raw: &[u8]) -> Self {
        let tag = String::from_utf8_lossy(raw);
        let tag = tag.trim_end_matches(|c: char| c == '\0' || c.is_ascii_whitespace());

        TAG_MAP
            .get(tag)
            .cloned()
            .unwrap_or_else(|| ObjectType::Other(tag.to_string()))
    }

    pub fn tag(&self) -> &str {
        match self {
            ObjectType::Other(tag) => tag.as_str(),
            known => known.known_tag().unwrap_or_default(),
        }
    }

    fn known_tag(&self) -> Option<&'static str> {
        use ObjectType::*;

        let tag = match self {
            Schema => "$H",
            Column => "$L",
            UserType => "$T",
            InternalTable => "IT",
            SystemTable => "S",
            TableType => "TT",
            UserTable => "U",
            View => "V",
            AggregateFunction => "AF",
            CheckConstraint => "C",
            DefaultConstraint => "D",
            ForeignKey => "F",
            ScalarFunction => "FN",
            ClrScalarFunction => "FS",
            ClrTableFunction => "FT",
            InlineTableFunction => "IF",
            Procedure => "P",
            ClrProcedure => "PC",
            PlanGuide => "PG",
            PrimaryKey => "PK",
            ReplicationFilterProcedure => "RF",
            Synonym => "SN",
            Sequence => "SO",
            ServiceQueue => "SQ",
            ClrTrigger => "TA",
            Trigger => "TR",
            TableFunction => "TF",
            UniqueConstraint => "UQ",
            ExtendedProcedure => "X",
            Other(_) => return None,
        };
        Some(tag)
    }

    /// Whether a directory of this type can be rendered as `CREATE TABLE`.
    pub fn is_table(&self) -> bool {
        matches!(self, ObjectType::UserTable | ObjectType::TableType)
    }
}

impl From<&[u8]> for ObjectType {
    fn from(raw: &[u8]) -> Self {
        ObjectType::from_tag(raw)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

fn build_tag_map() -> HashMap<&'static str, ObjectType> {
    use ObjectType::*;

    let entries = [
        Schema,
        Column,
        UserType,
        InternalTable,
        SystemTable,
        TableType,
        UserTable,
        View,
        AggregateFunction,
        CheckConstraint,
        DefaultConstraint,
        ForeignKey,
        ScalarFunction,
        ClrScalarFunction,
        ClrTableFunction,
        InlineTableFunction,
        Procedure,
        ClrProcedure,
        PlanGuide,
        PrimaryKey,
        ReplicationFilterProcedure,
        Synonym,
        Sequence,
        ServiceQueue,
        ClrTrigger,
        Trigger,
        TableFunction,
        UniqueConstraint,
        ExtendedProcedure,
    ];

    entries
        .into_iter()
        .filter_map(|entry| entry.known_tag().map(|tag| (tag, entry)))
        .collect()
}
