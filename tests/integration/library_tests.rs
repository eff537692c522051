use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use library_catalog::{
    config::LoanConfig,
    models::{OverdueLoan, Title},
    AppError, Library, ManualClock,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap()
}

/// Library whose clock stays at `t0` until moved through the returned handle
fn library() -> (Library, ManualClock) {
    let clock = ManualClock::new(t0());
    let library = Library::with_clock(&LoanConfig::default(), clock.clone()).unwrap();
    (library, clock)
}

fn overdue(title: &str, user: &str) -> OverdueLoan {
    OverdueLoan {
        title: Title::new(title),
        user: user.to_string(),
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let (mut library, _) = library();
    library.add_book("Dune", 1).unwrap();

    let hits = library.search_books("dU");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title.as_str(), "dune");
}

#[test]
fn test_prefix_ending_in_sigma_finds_longer_title() {
    let (mut library, _) = library();
    library.add_book("ΟΔΟΣΑ", 1).unwrap();

    let hits = library.search_books("ΟΔΟΣ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, Title::new("ΟΔΟΣΑ"));
}

#[test]
fn test_copy_count_overflow_is_an_error() {
    let (mut library, _) = library();
    library.add_book("Dune", u32::MAX).unwrap();

    assert_eq!(
        library.add_book("Dune", 1),
        Err(AppError::CopyLimitExceeded("dune".into()))
    );
    assert_eq!(library.book("Dune").total, u32::MAX);
}

#[test]
fn test_invalid_loan_period_rejected() {
    for days in [0, -1, i64::MAX / 1000] {
        let clock = ManualClock::new(t0());
        assert!(Library::with_clock(&LoanConfig { duration_days: days }, clock).is_err());
    }
}

#[test]
fn test_empty_prefix_returns_every_title_once() {
    let (mut library, _) = library();
    for title in ["Ulysses", "Dune", "emma", "DUNE", "Dune Messiah"] {
        library.add_book(title, 1).unwrap();
    }

    let titles: Vec<String> = library
        .search_books("")
        .into_iter()
        .map(|b| b.title.to_string())
        .collect();
    let unique: HashSet<&String> = titles.iter().collect();
    assert_eq!(titles.len(), 4);
    assert_eq!(unique.len(), 4);
}

#[test]
fn test_issue_until_unavailable() {
    let (mut library, _) = library();
    library.add_book("Dune", 2).unwrap();
    library.add_user("u").unwrap();

    library.issue_book("u", "Dune").unwrap();
    assert_eq!(library.book("Dune").available, 1);
    library.issue_book("u", "Dune").unwrap();
    assert_eq!(library.book("Dune").available, 0);

    assert_eq!(
        library.issue_book("u", "Dune"),
        Err(AppError::BookUnavailable("dune".into()))
    );
    assert_eq!(library.book("Dune").available, 0);
    assert_eq!(library.list_user_books("u").unwrap().len(), 2);
}

#[test]
fn test_availability_stays_within_bounds() {
    let (mut library, _) = library();
    library.add_book("Dune", 2).unwrap();
    library.add_user("a").unwrap();
    library.add_user("b").unwrap();

    let steps: [(bool, &str); 8] = [
        (true, "a"),
        (true, "b"),
        (true, "a"),
        (false, "a"),
        (false, "a"),
        (false, "a"),
        (false, "b"),
        (true, "b"),
    ];
    for (issue, user) in steps {
        let _ = if issue {
            library.issue_book(user, "Dune").map(|_| ())
        } else {
            library.return_book(user, "Dune")
        };
        let entry = library.book("Dune");
        assert_eq!(entry.total, 2);
        assert!(entry.available <= entry.total);
    }
    assert_eq!(library.book("Dune").available, 1);
}

#[test]
fn test_return_of_unissued_title_keeps_availability() {
    let (mut library, _) = library();
    library.add_book("Dune", 1).unwrap();
    library.add_user("Alice").unwrap();
    library.add_user("Bob").unwrap();
    library.issue_book("Alice", "Dune").unwrap();

    assert_eq!(
        library.return_book("Bob", "Dune"),
        Err(AppError::NotIssuedToUser {
            user: "Bob".into(),
            title: "dune".into(),
        })
    );
    assert_eq!(library.book("Dune").available, 0);

    library.return_book("Alice", "DUNE").unwrap();
    assert_eq!(library.book("Dune").available, 1);
    assert!(library.list_user_books("Alice").unwrap().is_empty());
}

#[test]
fn test_overdue_is_reported_once() {
    let (mut library, _) = library();
    library.add_user("Alice").unwrap();
    library.add_book("Dune", 1).unwrap();
    let loan = library.issue_book("Alice", "Dune").unwrap();
    assert_eq!(loan.due_at, t0() + Duration::days(7));

    assert_eq!(
        library.list_overdue(t0() + Duration::days(8)),
        vec![overdue("Dune", "Alice")]
    );
    assert!(library.list_overdue(t0() + Duration::days(9)).is_empty());
}

#[test]
fn test_same_instant_sweep_twice() {
    let (mut library, clock) = library();
    library.add_user("Alice").unwrap();
    library.add_book("Dune", 1).unwrap();
    library.add_book("Emma", 1).unwrap();
    library.issue_book("Alice", "Dune").unwrap();
    library.issue_book("Alice", "Emma").unwrap();

    clock.advance(Duration::days(10));
    assert_eq!(library.list_overdue_now().len(), 2);
    assert!(library.list_overdue_now().is_empty());
}

#[test]
fn test_not_yet_due() {
    let (mut library, _) = library();
    library.add_user("Alice").unwrap();
    library.add_book("Dune", 1).unwrap();
    library.issue_book("Alice", "Dune").unwrap();

    assert!(library
        .list_overdue(t0() + Duration::days(7) - Duration::seconds(1))
        .is_empty());
    assert_eq!(library.list_overdue(t0() + Duration::days(7)).len(), 1);
}

#[test]
fn test_returned_book_is_not_reported() {
    let (mut library, _) = library();
    library.add_user("Alice").unwrap();
    library.add_book("Dune", 1).unwrap();
    library.issue_book("Alice", "Dune").unwrap();
    library.return_book("Alice", "Dune").unwrap();

    assert!(library.list_overdue(t0() + Duration::days(30)).is_empty());
}

#[test]
fn test_reissued_title_attributes_newer_borrower() {
    // Loans are tracked per title: the matured entry belongs to Alice's
    // loan but the borrower map only remembers Bob.
    let (mut library, clock) = library();
    library.add_user("Alice").unwrap();
    library.add_user("Bob").unwrap();
    library.add_book("Dune", 1).unwrap();

    library.issue_book("Alice", "Dune").unwrap();
    clock.advance(Duration::days(1));
    library.return_book("Alice", "Dune").unwrap();
    clock.advance(Duration::days(1));
    library.issue_book("Bob", "Dune").unwrap();

    let sweep = t0() + Duration::hours(7 * 24 + 12);
    assert_eq!(library.list_overdue(sweep), vec![overdue("Dune", "Bob")]);

    // Bob's own entry matures later and is reported again under his name
    assert_eq!(
        library.list_overdue(t0() + Duration::days(9)),
        vec![overdue("Dune", "Bob")]
    );
}

#[test]
fn test_custom_loan_period() {
    let clock = ManualClock::new(t0());
    let mut library = Library::with_clock(&LoanConfig { duration_days: 14 }, clock).unwrap();
    library.add_user("Alice").unwrap();
    library.add_book("Dune", 1).unwrap();

    let loan = library.issue_book("Alice", "Dune").unwrap();
    assert_eq!(loan.due_at, t0() + Duration::days(14));
    assert!(library.list_overdue(t0() + Duration::days(8)).is_empty());
}

#[test]
fn test_results_serialize_for_front_ends() {
    let (mut library, _) = library();
    library.add_user("Alice").unwrap();
    library.add_book("Dune", 1).unwrap();
    let loan = library.issue_book("Alice", "Dune").unwrap();

    let json = serde_json::to_value(&loan).unwrap();
    assert_eq!(json["title"], "dune");
    assert_eq!(json["user"], "Alice");
    assert!(json["due_at"].as_str().unwrap().starts_with("2024-01-17T08:00:00"));
}
