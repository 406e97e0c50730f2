use super::entry;
use crate::logs::{SectionStat, StatusFamily, section_key};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn section_key_is_first_segment() {
    assert_eq!(section_key("/api/x"), Some("api"));
    assert_eq!(section_key("/report"), Some("report"));
    assert_eq!(section_key("/search?q=a/b"), Some("search"));
    assert_eq!(section_key("/pages/create?id=1"), Some("pages"));
    assert_eq!(section_key("//double/slash"), Some("double"));
    assert_eq!(section_key("relative/path"), Some("relative"));
}

#[test]
fn paths_without_section() {
    assert_eq!(section_key("/"), None);
    assert_eq!(section_key(""), None);
    assert_eq!(section_key("/?q=1"), None);
    assert_eq!(section_key("///"), None);
}

#[test]
fn status_family_boundaries() {
    let cases = [
        (0, StatusFamily::Unknown),
        (99, StatusFamily::Unknown),
        (100, StatusFamily::Informational),
        (199, StatusFamily::Informational),
        (200, StatusFamily::Success),
        (304, StatusFamily::Redirection),
        (404, StatusFamily::ClientError),
        (599, StatusFamily::ServerError),
        (600, StatusFamily::Unknown),
        (u16::MAX, StatusFamily::Unknown),
    ];

    for (status, family) in cases {
        assert_eq!(StatusFamily::of(status), family, "status {status}");
    }
}

#[test]
fn family_labels_sort_in_print_order() {
    let mut families = vec![
        StatusFamily::Unknown,
        StatusFamily::ServerError,
        StatusFamily::Success,
        StatusFamily::Informational,
    ];
    families.sort();

    let labels: Vec<_> = families.iter().map(|f| f.to_string()).collect();
    assert_eq!(labels, vec!["1xx", "2xx", "5xx", "???"]);
}

#[test]
fn average_size_floors() {
    let mut stat = SectionStat::new("api");
    assert_eq!(stat.average_size(), None);

    stat.record(entry("/api/a", 200, 10));
    stat.record(entry("/api/b", 200, 11));
    assert_eq!(stat.average_size(), Some(10));
}

#[test]
fn average_size_does_not_overflow() {
    let mut stat = SectionStat::new("big");
    stat.record(entry("/big", 200, u64::MAX));
    stat.record(entry("/big", 200, u64::MAX));

    assert_eq!(stat.average_size(), Some(u64::MAX));
}

#[test]
fn status_families_count_only_present_families() {
    let mut stat = SectionStat::new("api");
    for status in [200, 201, 404, 503, 0] {
        stat.record(entry("/api", status, 1));
    }

    let expected = BTreeMap::from([
        (StatusFamily::Success, 2),
        (StatusFamily::ClientError, 1),
        (StatusFamily::ServerError, 1),
        (StatusFamily::Unknown, 1),
    ]);
    assert_eq!(stat.status_families(), expected);
    assert_eq!(stat.count, 5);
    assert_eq!(stat.sizes.len(), 5);
    assert_eq!(stat.entries.len(), 5);
}
