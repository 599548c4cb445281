//! SHOW 语句用到的对象种类关键字。

use std::fmt;

/// `SHOW GRANTS ON <kind> <name>` 中可出现的对象种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Database,
    EventTable,
    FileFormat,
    Function,
    Pipe,
    Policy,
    Procedure,
    Schema,
    Sequence,
    Stream,
    Table,
    Tag,
    Task,
    View,
}

impl ObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Database => "DATABASE",
            Self::EventTable => "EVENT TABLE",
            Self::FileFormat => "FILE FORMAT",
            Self::Function => "FUNCTION",
            Self::Pipe => "PIPE",
            Self::Policy => "POLICY",
            Self::Procedure => "PROCEDURE",
            Self::Schema => "SCHEMA",
            Self::Sequence => "SEQUENCE",
            Self::Stream => "STREAM",
            Self::Table => "TABLE",
            Self::Tag => "TAG",
            Self::Task => "TASK",
            Self::View => "VIEW",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `SHOW [<kind>] INTEGRATIONS` 的种类前缀。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntegrationKind {
    #[default]
    All,
    Api,
    Notification,
    Security,
    Storage,
}

impl IntegrationKind {
    /// `All` 没有前缀关键字。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Api => "API",
            Self::Notification => "NOTIFICATION",
            Self::Security => "SECURITY",
            Self::Storage => "STORAGE",
        }
    }
}
