use crate::command::Command;

pub(super) fn command_from_name(name: &str) -> Option<Command> {
    match name {
        "up" => Some(Command::SelectPrev),
        "down" => Some(Command::SelectNext),
        "select" => Some(Command::Confirm),
        "cancel" => Some(Command::Cancel),
        "clear_filter" => Some(Command::ClearFilter),
        _ => None,
    }
}

pub(super) fn command_description(name: &str) -> String {
    match name {
        "up" => "Up",
        "down" => "Down",
        "select" => "Select",
        "cancel" => "Cancel",
        "clear_filter" => "Clear filter",
        _ => "Unknown",
    }
    .into()
}
