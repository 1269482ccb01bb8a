use crate::models::student::StudentRecord;

/// Splits a list cell. `;` wins over `,`; a cell with neither is a single item.
/// Items are trimmed and blanks dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    let separator = if raw.contains(';') {
        ';'
    } else if raw.contains(',') {
        ','
    } else {
        return match raw.trim() {
            "" => Vec::new(),
            item => vec![item.to_string()],
        };
    };

    raw.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Match rules, tried in order against a trimmed, lowercased query:
/// id equality, name equality, name substring, domain equality, and finally any
/// of the record's skills appearing inside the query.
pub(super) fn matches_query(record: &StudentRecord, query: &str) -> bool {
    let student_id = record.student_id.trim().to_lowercase();
    let name = record.name.trim().to_lowercase();
    let domain = record.domain().to_lowercase();

    if query == student_id || query == name || name.contains(query) || query == domain {
        return true;
    }

    record
        .skill_list()
        .iter()
        .any(|skill| query.contains(&skill.to_lowercase()))
}
