use schoolhub::store::{Outcome, Phase, Slice, StoreState};

#[test]
fn fresh_slice_is_idle() {
    let slice: Slice<Vec<String>> = Slice::new();
    assert_eq!(*slice.phase(), Phase::Idle);
    assert!(slice.phase().data().is_none());
    assert!(slice.phase().message().is_none());
}

#[test]
fn begin_then_success_lands_in_succeeded() {
    let mut slice: Slice<Vec<i64>> = Slice::new();
    let token = slice.begin();
    assert!(slice.phase().is_loading());

    slice.resolve(token, Outcome::Success(vec![1, 2, 3]));
    assert_eq!(slice.phase().data(), Some(&vec![1, 2, 3]));
}

#[test]
fn rejection_carries_the_server_message_verbatim() {
    let mut slice: Slice<Vec<i64>> = Slice::new();
    let token = slice.begin();
    slice.resolve(token, Outcome::Rejected("already exists".to_string()));
    assert_eq!(*slice.phase(), Phase::Failed("already exists".to_string()));
}

#[test]
fn transport_failure_lands_in_error() {
    let mut slice: Slice<Vec<i64>> = Slice::new();
    let token = slice.begin();
    slice.resolve(token, Outcome::Transport("Network Error".to_string()));
    assert_eq!(*slice.phase(), Phase::Error("Network Error".to_string()));
}

#[test]
fn begin_clears_stale_failure_message() {
    let mut slice: Slice<i64> = Slice::new();
    let token = slice.begin();
    slice.resolve(token, Outcome::Rejected("duplicate roll number".to_string()));
    assert!(slice.phase().message().is_some());

    slice.begin();
    assert!(slice.phase().is_loading());
    assert!(slice.phase().message().is_none());
}

#[test]
fn machine_is_reenterable_from_every_settled_state() {
    let mut slice: Slice<i64> = Slice::new();

    let token = slice.begin();
    slice.resolve(token, Outcome::Success(7));
    let token = slice.begin();
    assert!(slice.phase().is_loading());
    slice.resolve(token, Outcome::Transport("Network Error".to_string()));

    let token = slice.begin();
    assert!(slice.phase().is_loading());
    slice.resolve(token, Outcome::Success(9));
    assert_eq!(slice.phase().data(), Some(&9));
}

#[test]
fn stale_response_is_discarded() {
    let mut slice: Slice<&'static str> = Slice::new();

    // Second fetch dispatched before the first resolves.
    let first = slice.begin();
    let second = slice.begin();

    // The newer request settles first; the older one arrives late.
    slice.resolve(second, Outcome::Success("fresh"));
    slice.resolve(first, Outcome::Success("stale"));
    assert_eq!(slice.phase().data(), Some(&"fresh"));
}

#[test]
fn stale_failure_cannot_clobber_a_newer_request() {
    let mut slice: Slice<&'static str> = Slice::new();
    let first = slice.begin();
    let second = slice.begin();

    slice.resolve(first, Outcome::Transport("Network Error".to_string()));
    assert!(
        slice.phase().is_loading(),
        "stale transport error must not surface while request two is in flight"
    );

    slice.resolve(second, Outcome::Success("fresh"));
    assert_eq!(slice.phase().data(), Some(&"fresh"));
}

#[test]
fn resolving_twice_with_the_same_token_is_inert_the_second_time() {
    let mut slice: Slice<i64> = Slice::new();
    let token = slice.begin();
    slice.resolve(token, Outcome::Success(1));
    slice.resolve(token, Outcome::Success(2));
    assert_eq!(slice.phase().data(), Some(&1));
}

#[test]
fn slices_in_the_store_are_independent() {
    let mut store = StoreState::new();

    let notices_token = store.notices.begin();
    let students_token = store.students.begin();

    store
        .notices
        .resolve(notices_token, Outcome::Transport("Network Error".to_string()));
    assert!(store.students.phase().is_loading());

    store.students.resolve(students_token, Outcome::Success(vec![]));
    assert_eq!(store.students.phase().data(), Some(&vec![]));
    assert_eq!(
        *store.notices.phase(),
        Phase::Error("Network Error".to_string())
    );
    assert_eq!(*store.teachers.phase(), Phase::Idle);
}
