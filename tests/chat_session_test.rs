use physio_assist::core::engine::{PROMPT, TYPING_INDICATOR};
use physio_assist::core::formatter::DISCLAIMER;
use physio_assist::core::session::DEFAULT_GREETING;
use physio_assist::domain::model::{ChatMessage, Role};
use physio_assist::{ChatEngine, ChatSession, KeywordClassifier, LocalStorage, PhysioAssistant};
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::BufReader;

fn instant_engine() -> ChatEngine<PhysioAssistant<KeywordClassifier>> {
    let assistant = PhysioAssistant::new(KeywordClassifier::new(), Duration::ZERO);
    ChatEngine::new(ChatSession::new(assistant, DEFAULT_GREETING))
}

async fn run_script(engine: &mut ChatEngine<PhysioAssistant<KeywordClassifier>>, script: &str) -> (usize, String) {
    let mut output = Vec::new();
    let answered = engine
        .run(BufReader::new(script.as_bytes()), &mut output)
        .await
        .unwrap();
    (answered, String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn test_session_answers_each_line_in_order() {
    let mut engine = instant_engine();
    let (answered, output) = run_script(
        &mut engine,
        "I have shoulder pain when lifting my arm\nmy lower back hurts\n",
    )
    .await;

    assert_eq!(answered, 2);
    assert!(output.starts_with(&format!("Assistant: {}", DEFAULT_GREETING)));
    assert_eq!(output.matches(TYPING_INDICATOR).count(), 2);
    assert_eq!(output.matches(DISCLAIMER).count(), 2);

    let shoulder = output.find("**Shoulder Circles**").unwrap();
    let back = output.find("**Cat-Cow Stretch**").unwrap();
    assert!(shoulder < back);

    let transcript = engine.session().transcript();
    let roles: Vec<_> = transcript.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![Role::Bot, Role::User, Role::Bot, Role::User, Role::Bot]
    );
    assert_eq!(transcript[3].content, "my lower back hurts");
}

#[tokio::test]
async fn test_blank_lines_are_skipped() {
    let mut engine = instant_engine();
    let (answered, output) = run_script(&mut engine, "\n   \n\t\nknee\n").await;

    assert_eq!(answered, 1);
    assert_eq!(output.matches(TYPING_INDICATOR).count(), 1);
    assert_eq!(engine.session().transcript().len(), 3);
}

#[tokio::test]
async fn test_exit_command_stops_reading() {
    let mut engine = instant_engine();
    let (answered, output) = run_script(&mut engine, "/exit\nmy knee hurts\n").await;

    assert_eq!(answered, 0);
    assert!(!output.contains("Quad Sets"));
    assert_eq!(engine.session().transcript().len(), 1);
}

#[tokio::test]
async fn test_help_and_clear_commands() {
    let mut engine = instant_engine();
    let (answered, output) = run_script(&mut engine, "/help\n/stretch\nleg\n/clear\n").await;

    // "/stretch" is not a command, so it is answered like any description
    assert_eq!(answered, 2);
    assert!(output.contains("Commands: /help"));
    assert!(output.contains("**General Mobility**"));
    assert!(output.contains("**Quad Sets**"));
    assert_eq!(output.matches(DEFAULT_GREETING).count(), 2);
    assert_eq!(engine.session().transcript().len(), 1);
}

#[tokio::test]
async fn test_slash_prefixed_description_is_classified() {
    let mut engine = instant_engine();
    let (answered, output) = run_script(&mut engine, "/my back hurts\n").await;

    assert_eq!(answered, 1);
    assert!(output.contains("**Cat-Cow Stretch**"));
    assert_eq!(engine.session().transcript()[1].content, "/my back hurts");
}

#[tokio::test]
async fn test_prompt_written_before_each_read() {
    let mut engine = instant_engine();
    let (_, output) = run_script(&mut engine, "tired\n").await;
    // one prompt per line plus the one that hits EOF
    assert_eq!(output.matches(PROMPT).count(), 2);
}

#[tokio::test]
async fn test_scripted_reader_from_mock_io() {
    let reader = tokio_test::io::Builder::new()
        .read(b"my spine is stiff\n")
        .read(b"/quit\n")
        .build();

    let mut engine = instant_engine();
    let mut output = Vec::new();
    let answered = engine
        .run(BufReader::new(reader), &mut output)
        .await
        .unwrap();

    assert_eq!(answered, 1);
    assert!(String::from_utf8(output).unwrap().contains("**Pelvic Tilts**"));
}

#[tokio::test(start_paused = true)]
async fn test_reply_delay_applies_per_submission() {
    let assistant = PhysioAssistant::new(KeywordClassifier::new(), Duration::from_millis(1000));
    let mut engine = ChatEngine::new(ChatSession::new(assistant, DEFAULT_GREETING));

    let start = tokio::time::Instant::now();
    let (answered, _) = run_script(&mut engine, "arm\nback\n").await;

    assert_eq!(answered, 2);
    assert!(start.elapsed() >= Duration::from_millis(2000));
}

#[tokio::test]
async fn test_transcript_saved_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    let mut engine = instant_engine();
    run_script(&mut engine, "my knee hurts\n").await;
    engine
        .session()
        .save_transcript(&storage, "chat/transcript.json")
        .await
        .unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join("chat/transcript.json")).unwrap();
    let messages: Vec<ChatMessage> = serde_json::from_str(&raw).unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].content, DEFAULT_GREETING);
    assert_eq!(messages[1].role, Role::User);
    assert!(messages[2].content.contains("**Heel Slides**"));
}
