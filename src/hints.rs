pub const HINTS_ON: &str = "Подсказки включены.";
pub const HINTS_OFF: &str = "Подсказки выключены.";

/// Status label text for a given toggle position
pub fn status_text(checked: bool) -> &'static str {
    if checked {
        HINTS_ON
    } else {
        HINTS_OFF
    }
}
