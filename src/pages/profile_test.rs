use super::*;

#[test]
fn follow_counts_reads_id_lists() {
    let user = UserProfile {
        id: "u1".to_owned(),
        followers: vec!["a".to_owned(), "b".to_owned()],
        following: vec!["c".to_owned()],
        ..UserProfile::default()
    };
    assert_eq!(follow_counts(&user), "2 followers · 1 following");
}
