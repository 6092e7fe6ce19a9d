use intake_core::IntakeSettings;
use intake_core::conversation::StageMachine;
use intake_core::session::{Session, Stage};

const INTAKE_INPUTS: [&str; 8] = [
    "Hi",
    "John Doe",
    "john@example.com",
    "+1234567890",
    "5",
    "Software Developer",
    "New York",
    "Python, SQL",
];

const SOLID_ANSWER: &str = "Generators let you yield values lazily, which keeps memory usage low.";

fn run(machine: &StageMachine, inputs: &[&str]) -> Session {
    inputs.iter().fold(Session::default(), |session, input| {
        let (session, reply) = machine.process_turn(session, input);
        assert!(!reply.is_empty(), "Reply to {input:?} should not be empty");
        session
    })
}

#[test]
fn test_intake_reaches_technical_questions() {
    let machine = StageMachine::default();
    let session = run(&machine, &INTAKE_INPUTS);

    assert_eq!(session.stage, Stage::TechnicalQuestions);
    assert_eq!(session.fields.name.as_deref(), Some("John Doe"));
    assert_eq!(session.fields.email.as_deref(), Some("john@example.com"));
    assert_eq!(session.fields.phone.as_deref(), Some("+1234567890"));
    assert_eq!(session.fields.experience, Some(5.0));
    assert_eq!(
        session.fields.desired_position.as_deref(),
        Some("Software Developer")
    );
    assert_eq!(session.fields.location.as_deref(), Some("New York"));
    assert_eq!(
        session.fields.tech_stack,
        Some(vec!["Python".to_string(), "SQL".to_string()])
    );
    assert!(!session.questions.is_empty(), "Questions should be generated");
    assert_eq!(session.question_index, 0);
    assert!(session.answers.is_empty());
}

#[test]
fn test_each_stage_advances_in_order() {
    let machine = StageMachine::default();
    let expected = [
        Stage::CollectingName,
        Stage::CollectingEmail,
        Stage::CollectingPhone,
        Stage::CollectingExperience,
        Stage::CollectingPosition,
        Stage::CollectingLocation,
        Stage::CollectingTechStack,
        Stage::TechnicalQuestions,
    ];

    let mut session = Session::default();
    let mut last_percent = session.completion_percentage();
    for (input, stage) in INTAKE_INPUTS.iter().zip(expected) {
        machine.handle_turn(&mut session, input);
        assert_eq!(session.stage, stage, "after {input:?}");
        assert!(session.completion_percentage() > last_percent);
        last_percent = session.completion_percentage();
    }
}

#[test]
fn test_full_assessment_completes() {
    let machine = StageMachine::default();
    let mut session = run(&machine, &INTAKE_INPUTS);
    let total = session.questions.len();

    let mut last_reply = String::new();
    for _ in 0..total {
        assert_eq!(session.stage, Stage::TechnicalQuestions);
        last_reply = machine.handle_turn(&mut session, SOLID_ANSWER);
        assert_eq!(session.answers.len(), session.question_index);
    }

    assert_eq!(session.stage, Stage::Completed);
    assert_eq!(session.answers.len(), total);
    assert_eq!(session.completion_percentage(), 100);
    assert!(last_reply.starts_with("🎉 Congratulations!"));

    // Answers were recorded against their questions, in order
    for (answer, question) in session.answers.iter().zip(&session.questions) {
        assert_eq!(&answer.question, question);
        assert_eq!(answer.answer_text, SOLID_ANSWER);
    }

    // Nothing changes after completion
    let fields = session.fields.clone();
    machine.handle_turn(&mut session, "Can I add another skill?");
    assert_eq!(session.stage, Stage::Completed);
    assert_eq!(session.fields, fields);
}

#[test]
fn test_ending_keywords_skip_remaining_stages() {
    let machine = StageMachine::default();

    for prefix_len in 0..INTAKE_INPUTS.len() {
        let mut session = run(&machine, &INTAKE_INPUTS[..prefix_len]);
        let stage_before = session.stage;
        let fields_before = session.fields.clone();

        let reply = machine.handle_turn(&mut session, "thanks, goodbye");

        assert_eq!(session.stage, Stage::Ended, "from {stage_before}");
        assert_eq!(session.ended_from, Some(stage_before));
        assert_eq!(session.fields, fields_before);
        assert!(reply.contains("Thank you for using TalentScout's Hiring Assistant!"));
    }
}

#[test]
fn test_invalid_input_is_idempotent() {
    let machine = StageMachine::default();
    let cases = [
        (1, "A"),
        (2, "not-an-email"),
        (3, "12"),
        (4, "several"),
        (5, "QA"),
        (6, "X"),
        (7, "go"),
    ];

    for (prefix_len, invalid) in cases {
        let mut session = run(&machine, &INTAKE_INPUTS[..prefix_len]);
        let stage = session.stage;
        let fields = session.fields.clone();

        for _ in 0..3 {
            let reply = machine.handle_turn(&mut session, invalid);
            assert!(!reply.is_empty());
            assert_eq!(session.stage, stage, "{invalid:?} should not advance {stage}");
            assert_eq!(session.fields, fields);
        }
    }
}

#[test]
fn test_settings_cap_question_count() {
    let settings = IntakeSettings {
        max_questions: 2,
        ..Default::default()
    };
    let machine = StageMachine::new(&settings);

    let mut inputs = INTAKE_INPUTS.to_vec();
    inputs[7] = "Python, SQL, Docker, Git";
    let session = run(&machine, &inputs);

    assert_eq!(session.questions.len(), 2);
}

#[test]
fn test_sessions_are_independent() {
    let machine = StageMachine::default();
    let first = run(&machine, &INTAKE_INPUTS[..3]);
    let second = run(&machine, &INTAKE_INPUTS[..5]);

    assert_ne!(first.id, second.id);
    assert_eq!(first.stage, Stage::CollectingPhone);
    assert_eq!(second.stage, Stage::CollectingPosition);
    assert!(first.fields.experience.is_none());
}
