//! Shared scenario fixtures

use classroom_core::{OpaqueId, Role, RoomCode};
use classroom_session::{Session, SessionStore};

/// A store with a teacher-owned room and one student who joined it
pub struct Classroom {
    pub store: SessionStore,
    pub teacher: Session,
    pub student: Session,
    pub code: RoomCode,
    pub teacher_id: OpaqueId,
    pub student_id: OpaqueId,
}

/// Build the standard fixture: Ms. Lee's "Algebra" room with one student
pub fn classroom() -> Classroom {
    let mut store = SessionStore::new();
    let mut teacher = Session::new();
    let mut student = Session::new();

    let teacher_id = store
        .login(&mut teacher, Role::Teacher, Some("Ms. Lee"))
        .expect("teacher login")
        .id
        .clone();
    let code = store
        .create_room(&mut teacher, "Algebra")
        .expect("create room");
    let student_id = store
        .login(&mut student, Role::Student, None)
        .expect("student login")
        .id
        .clone();
    store
        .join_room(&mut student, code.as_str())
        .expect("join room");

    Classroom {
        store,
        teacher,
        student,
        code,
        teacher_id,
        student_id,
    }
}

impl Classroom {
    /// Silence the student `times` times for `minutes` each
    pub fn silence_student(&mut self, times: u32, minutes: i64) {
        for _ in 0..times {
            self.store
                .silence_user(&self.teacher, &self.student_id, minutes)
                .expect("silence student");
        }
    }

    /// The room's stored snapshot of the student
    pub fn student_snapshot(&self) -> &classroom_core::User {
        self.store
            .current_room(&self.teacher)
            .expect("teacher room")
            .participant(&self.student_id)
            .expect("student participant")
    }
}
