#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    UpdateComment(String),
    AddComment,
    EditComment,
    SaveComment,
    DownloadDocumentation,
    Delete,
    Archive,
}
