use std::fs;
use std::time::{Duration, Instant};

use callsense::analysis::Classifier;
use callsense::mailbox::{Mailbox, Record, RecordObserver, RecordPublisher};
use callsense::speech::Transcript;

fn publisher_for(mailbox: Mailbox) -> RecordPublisher {
    RecordPublisher::new(Classifier::new(), mailbox)
}

fn sample_record(text: &str) -> Record {
    let classifier = Classifier::new();
    let classification = classifier.classify(text);
    let suggestions = callsense::analysis::reason(&classification);
    Record::new(text, classification, suggestions)
}

#[test]
fn store_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mailbox = Mailbox::new(dir.path().join("live_output.json"));

    let record = sample_record("I want to book a table at 8 pm for 2 people");
    mailbox.store(&record).unwrap();

    let loaded = mailbox.load().unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn store_overwrites_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let mailbox = Mailbox::new(dir.path().join("live_output.json"));

    mailbox.store(&sample_record("first utterance")).unwrap();
    mailbox.store(&sample_record("second utterance")).unwrap();

    assert_eq!(mailbox.load().unwrap().text, "second utterance");
    // No temp file left behind after a completed store.
    assert!(!dir.path().join("live_output.json.tmp").exists());
}

#[test]
fn observer_tolerates_missing_and_corrupt_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("live_output.json");
    let mut observer = RecordObserver::new(Mailbox::new(&path));

    // Mailbox does not exist yet.
    assert!(observer.poll().is_none());

    // Good record appears.
    Mailbox::new(&path).store(&sample_record("hello")).unwrap();
    assert_eq!(observer.poll().unwrap().text, "hello");

    // Corrupt content: last good record stays current.
    fs::write(&path, "{ not json").unwrap();
    assert_eq!(observer.poll().unwrap().text, "hello");

    // Document missing required fields is rejected, not crashed on.
    fs::write(&path, r#"{"text": "orphan"}"#).unwrap();
    assert_eq!(observer.poll().unwrap().text, "hello");

    // Recovery on the next good write.
    Mailbox::new(&path).store(&sample_record("recovered")).unwrap();
    assert_eq!(observer.poll().unwrap().text, "recovered");
}

#[test]
fn publisher_returns_the_record_it_published() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("live_output.json");
    let publisher = publisher_for(Mailbox::new(&path));

    let transcript = Transcript::new("I received the wrong laptop, need a return").unwrap();
    let record = publisher.publish(&transcript);

    assert_eq!(record.text, "I received the wrong laptop, need a return");
    assert_eq!(Mailbox::new(&path).load().unwrap(), record);
}

#[test]
fn publish_survives_mailbox_write_failure() {
    // Point the mailbox at a directory that does not exist: both the
    // first write and the retry fail, the record is dropped, and publish
    // still returns it without panicking.
    let publisher = publisher_for(Mailbox::new("/nonexistent-dir/live_output.json"));
    let transcript = Transcript::new("hello").unwrap();
    let record = publisher.publish(&transcript);
    assert_eq!(record.text, "hello");
}

#[test]
fn concurrent_reader_never_observes_a_torn_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("live_output.json");

    const WRITES: usize = 300;

    let writer_path = path.clone();
    let writer = std::thread::spawn(move || {
        let mailbox = Mailbox::new(writer_path);
        for i in 0..WRITES {
            mailbox.store(&sample_record(&format!("utterance {i}"))).unwrap();
        }
    });

    // Poll as fast as possible while the writer runs. Every successful
    // load must be a complete document; observed indices must form a
    // non-decreasing subsequence of the writes.
    let mailbox = Mailbox::new(&path);
    let mut last_seen: i64 = -1;
    let deadline = Instant::now() + Duration::from_secs(30);
    while last_seen < (WRITES - 1) as i64 {
        assert!(Instant::now() < deadline, "reader never caught up");
        match mailbox.load() {
            Ok(record) => {
                let index: i64 = record
                    .text
                    .strip_prefix("utterance ")
                    .expect("complete document has the full text")
                    .parse()
                    .unwrap();
                assert!(
                    index >= last_seen,
                    "observed records must be a subsequence: {index} after {last_seen}"
                );
                // Structural completeness: required nested fields parsed.
                assert!(!record.ai_suggestions.next_question.is_empty());
                last_seen = index;
            }
            // "Not yet written" is the only acceptable failure before the
            // first store; rename makes torn reads impossible afterwards.
            Err(_) => assert_eq!(last_seen, -1, "document vanished mid-run"),
        }
    }

    writer.join().unwrap();
    assert_eq!(mailbox.load().unwrap().text, format!("utterance {}", WRITES - 1));
}
