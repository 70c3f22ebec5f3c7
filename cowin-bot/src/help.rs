//! `/help` text.

pub fn help_text() -> String {
    [
        "Available commands:",
        "/help - show this list",
        "/states - list state ids and names",
        "district <state_id> - list districts of a state",
        "find_by_pin DD-MM-YYYY <pincode> - vaccination slots at a pincode on a date",
        "find_by_district_id DD-MM-YYYY <district_id> - vaccination slots in a district on a date, 5 per page",
    ]
    .join("\n")
}
