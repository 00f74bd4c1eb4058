use super::*;

#[test]
fn transcript_default_empty() {
    let state = TranscriptState::default();
    assert!(state.is_empty());
    assert_eq!(state.len(), 0);
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = TranscriptState::default();
    let a = state.push(Sender::You, EntryBody::Text("hi".to_owned()));
    let b = state.push(Sender::Assistant, EntryBody::Html("<p>hello</p>".to_owned()));
    assert!(b > a);
    assert_eq!(state.len(), 2);
    assert_eq!(state.entries[0].sender, Sender::You);
    assert_eq!(state.entries[1].sender, Sender::Assistant);
}

#[test]
fn sender_labels() {
    assert_eq!(Sender::You.label(), "You");
    assert_eq!(Sender::Assistant.label(), "Assistant");
    assert_eq!(Sender::Error.label(), "Error");
}
