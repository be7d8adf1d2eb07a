// What a guarded page knows about the signed-in editor.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub email: String,
}
