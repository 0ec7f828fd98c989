//! End-to-end classroom flows: rooms, messages, reactions, and polls

use chrono::{Duration, Utc};
use classroom_core::{Role, Room, RoomCode};
use classroom_session::{Session, SessionError, SessionStore};
use integration_tests::classroom;

#[test]
fn student_cannot_create_room_teacher_gets_code() {
    let mut store = SessionStore::new();
    let mut session = Session::new();

    store.login(&mut session, Role::Student, None).unwrap();
    assert_eq!(
        store.create_room(&mut session, "Algebra").unwrap_err(),
        SessionError::NotTeacher
    );

    store
        .login(&mut session, Role::Teacher, Some("Ms. Lee"))
        .unwrap();
    let code = store.create_room(&mut session, "Algebra").unwrap();
    assert_eq!(code.as_str().len(), RoomCode::LEN);
    assert!(code
        .as_str()
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert_eq!(store.current_room(&session).unwrap().participant_count(), 1);
}

#[test]
fn full_classroom_scenario() {
    let mut cls = classroom();

    // Student joined under a generated pseudonym
    let room = cls.store.current_room(&cls.student).unwrap();
    assert_eq!(room.participant_count(), 2);
    let student_name = &cls.student.current_user().unwrap().display_name;
    assert_ne!(student_name, "Ms. Lee");
    assert!(!student_name.is_empty());

    // Flagged message: send fails, session violations 1, nothing appended
    let err = cls
        .store
        .send_message(&mut cls.student, "I hate this")
        .unwrap_err();
    assert_eq!(err, SessionError::ContentFlagged);
    assert_eq!(cls.student.current_user().unwrap().violations, 1);
    assert!(cls
        .store
        .current_room(&cls.student)
        .unwrap()
        .messages
        .is_empty());

    // Teacher silences for 30 minutes: room-scoped counter becomes 1,
    // expiry set, no ban (count below threshold)
    cls.silence_student(1, 30);
    let snapshot = cls.student_snapshot();
    assert_eq!(snapshot.violations, 1);
    assert!(!snapshot.banned);
    let until = snapshot.silenced_until.expect("expiry set");
    let now = Utc::now();
    assert!(until > now + Duration::minutes(29));
    assert!(until <= now + Duration::minutes(31));
}

#[test]
fn reaction_toggle_is_an_involution_across_sessions() {
    let mut cls = classroom();
    let message_id = cls
        .store
        .send_message(&mut cls.teacher, "Welcome to Algebra")
        .unwrap();

    cls.store
        .add_reaction(&cls.student, &message_id, "👍")
        .unwrap();
    cls.store
        .add_reaction(&cls.teacher, &message_id, "👍")
        .unwrap();

    let room = cls.store.current_room(&cls.teacher).unwrap();
    assert_eq!(room.messages[0].reaction_count("👍"), 2);

    // Toggling again removes only the student's reaction
    cls.store
        .add_reaction(&cls.student, &message_id, "👍")
        .unwrap();
    let room = cls.store.current_room(&cls.teacher).unwrap();
    assert_eq!(room.messages[0].reaction_count("👍"), 1);
    assert!(room.messages[0].has_reacted("👍", &cls.teacher_id));
    assert!(!room.messages[0].has_reacted("👍", &cls.student_id));
}

#[test]
fn poll_voting_is_single_choice_per_user() {
    let mut cls = classroom();
    let poll_id = cls
        .store
        .create_poll(
            &cls.teacher,
            "Is zero even?",
            &["Yes".to_string(), "No".to_string()],
        )
        .unwrap();

    cls.store.vote_poll(&cls.student, &poll_id, "Yes").unwrap();
    cls.store.vote_poll(&cls.teacher, &poll_id, "Yes").unwrap();
    cls.store.vote_poll(&cls.student, &poll_id, "No").unwrap();

    let room = cls.store.current_room(&cls.teacher).unwrap();
    let poll = room.poll(&poll_id).unwrap();
    assert_eq!(poll.votes_for("Yes"), 1);
    assert_eq!(poll.votes_for("No"), 1);
    assert_eq!(poll.choice_of(&cls.student_id), Some("No"));
    assert_eq!(poll.choice_of(&cls.teacher_id), Some("Yes"));
}

#[test]
fn students_cannot_create_or_close_polls() {
    let mut cls = classroom();
    assert_eq!(
        cls.store
            .create_poll(
                &cls.student,
                "Quiz?",
                &["A".to_string(), "B".to_string()]
            )
            .unwrap_err(),
        SessionError::NotTeacher
    );

    let poll_id = cls
        .store
        .create_poll(
            &cls.teacher,
            "Quiz?",
            &["A".to_string(), "B".to_string()],
        )
        .unwrap();
    assert_eq!(
        cls.store.close_poll(&cls.student, &poll_id).unwrap_err(),
        SessionError::NotTeacher
    );

    // Closing stops further votes from any session
    cls.store.close_poll(&cls.teacher, &poll_id).unwrap();
    let err = cls.store.vote_poll(&cls.student, &poll_id, "A").unwrap_err();
    assert_eq!(err.code(), "POLL_CLOSED");
}

#[test]
fn room_serializes_as_a_dto() {
    let mut cls = classroom();
    cls.store
        .send_message(&mut cls.teacher, "Welcome to Algebra")
        .unwrap();
    cls.store
        .create_poll(
            &cls.teacher,
            "Is zero even?",
            &["Yes".to_string(), "No".to_string()],
        )
        .unwrap();

    let room = cls.store.current_room(&cls.teacher).unwrap();
    let json = serde_json::to_string(room).unwrap();
    let back: Room = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, room);
}
