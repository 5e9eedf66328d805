/// One parsed access-log line, fields in source column order.
///
/// `status` and `size` are carried through for completeness but no analyzer
/// reads them. Records are built once by the parser and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub path: String,
    pub timestamp: String,
    pub browser: String,
    pub status: String,
    pub size: String,
}
