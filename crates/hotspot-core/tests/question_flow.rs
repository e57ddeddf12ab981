//! Drives a question end to end through a recording host.

use hotspot_core::{
    AnsweredEvent, ButtonId, ClickTarget, Feedback, HotspotQuestion, OutcomeKind, PercentPoint,
    PixelSize, QuestionHost, QuestionParams, ScoredTask,
};

#[derive(Debug, Default)]
struct RecordingHost {
    retry_visible: bool,
    feedback: Option<Feedback>,
    events: Vec<AnsweredEvent>,
}

impl QuestionHost for RecordingHost {
    fn show_button(&mut self, button: ButtonId) {
        assert_eq!(button, ButtonId::RetryButton);
        self.retry_visible = true;
    }

    fn hide_button(&mut self, button: ButtonId) {
        assert_eq!(button, ButtonId::RetryButton);
        self.retry_visible = false;
    }

    fn set_feedback(&mut self, feedback: &Feedback) {
        self.feedback = Some(feedback.clone());
    }

    fn remove_feedback(&mut self) {
        self.feedback = None;
    }

    fn answered(&mut self, event: &AnsweredEvent) {
        self.events.push(event.clone());
    }
}

const WRAPPER: PixelSize = PixelSize {
    width: 800.0,
    height: 400.0,
};

const PARAMS: &str = r#"{
    "imageHotspotQuestion": {
        "backgroundImageSettings": { "path": "harbour.jpg" },
        "hotspotSettings": {
            "noneSelectedFeedback": "Nothing there.",
            "hotspot": [
                {
                    "computedSettings": { "x": 50, "y": 50, "width": 10, "height": 10 },
                    "userSettings": { "correct": true, "feedbackText": "Correct spot" }
                },
                {
                    "computedSettings": { "x": 50, "y": 50, "width": 10, "height": 10 },
                    "userSettings": { "correct": false, "feedbackText": "Wrong spot" }
                },
                {
                    "computedSettings": { "x": 0, "y": 80, "width": 20, "height": 20 },
                    "userSettings": { "correct": false, "feedbackText": "Not the lighthouse" }
                }
            ]
        }
    }
}"#;

fn question() -> HotspotQuestion {
    let params = QuestionParams::from_json(PARAMS).expect("Failed to parse params");
    HotspotQuestion::new(params).with_title("Find the lighthouse")
}

/// Pixel position of a percentage point in `WRAPPER`.
fn px(x: f64, y: f64) -> (f64, f64) {
    (x * WRAPPER.width / 100.0, y * WRAPPER.height / 100.0)
}

#[test]
fn test_first_click_wins() {
    let mut q = question();
    let mut host = RecordingHost::default();

    let (x, y) = px(5.0, 90.0);
    let first = q.click(&mut host, ClickTarget::Wrapper, x, y, WRAPPER).unwrap();
    assert_eq!(first.kind, OutcomeKind::Incorrect);

    let (x, y) = px(55.0, 55.0);
    assert!(q.click(&mut host, ClickTarget::Wrapper, x, y, WRAPPER).is_none());

    assert_eq!(q.selection().unwrap().matched_hotspot, Some(2));
    assert_eq!(q.score(), 0);
    assert_eq!(host.events.len(), 1);
    assert_eq!(host.feedback.as_ref().unwrap().text, "Not the lighthouse");
}

#[test]
fn test_overlap_matches_first_configured() {
    let mut q = question();
    let mut host = RecordingHost::default();

    // Click lands on the nested region element at (400, 200) in the wrapper.
    let target = ClickTarget::Nested {
        offset_left: 400.0,
        offset_top: 200.0,
    };
    let outcome = q.click(&mut host, target, 20.0, 10.0, WRAPPER).unwrap();

    assert_eq!(outcome.matched_hotspot, Some(0));
    assert_eq!(q.score(), 1);
    assert_eq!(q.max_score(), 1);
    assert!(!host.retry_visible);

    let feedback = host.feedback.as_ref().unwrap();
    assert_eq!(feedback.text, "Correct spot");
    assert_eq!(feedback.score_label(), "You got 1 out of 1 points");

    let event = &host.events[0];
    assert!(event.success);
    assert_eq!(event.title, "Find the lighthouse");
    assert_eq!(event.hotspot_index, Some(0));
}

#[test]
fn test_miss_uses_none_selected_feedback() {
    let mut q = question();
    let mut host = RecordingHost::default();

    let outcome = q.click(&mut host, ClickTarget::Wrapper, 0.0, 0.0, WRAPPER).unwrap();

    assert_eq!(outcome.kind, OutcomeKind::NoneSelected);
    assert_eq!(outcome.matched_hotspot, None);
    assert_eq!(q.score(), 0);
    assert!(host.retry_visible);
    assert_eq!(host.feedback.as_ref().unwrap().text, "Nothing there.");
    assert_eq!(host.events[0].hotspot_index, None);
}

#[test]
fn test_reset_clears_state() {
    let mut q = question();
    let mut host = RecordingHost::default();

    let (x, y) = px(55.0, 55.0);
    q.click(&mut host, ClickTarget::Wrapper, x, y, WRAPPER);
    assert!(q.answer_given());
    assert_eq!(q.score(), 1);

    q.reset_task(&mut host);
    assert!(!q.answer_given());
    assert_eq!(q.score(), 0);
    assert!(q.selection().is_none());
    assert!(host.feedback.is_none());
    assert!(!host.retry_visible);

    let (x, y) = px(5.0, 90.0);
    let next = q.click(&mut host, ClickTarget::Wrapper, x, y, WRAPPER).unwrap();
    assert_eq!(next.matched_hotspot, Some(2));
    assert_eq!(host.events.len(), 2);
}

#[test]
fn test_retry_disabled_keeps_button_hidden() {
    let mut params = QuestionParams::from_json(PARAMS).unwrap();
    params.behaviour.enable_retry = false;
    let mut q = HotspotQuestion::new(params);
    let mut host = RecordingHost::default();

    q.click(&mut host, ClickTarget::Wrapper, 0.0, 0.0, WRAPPER);
    assert!(!host.retry_visible);
}

#[test]
fn test_marker_follows_resizes_without_drift() {
    let mut q = question();
    let mut host = RecordingHost::default();
    let marker = PixelSize::new(24.0, 24.0);

    assert!(q.marker_placement(WRAPPER, marker).is_none());

    q.click(&mut host, ClickTarget::Wrapper, 123.0, 77.0, WRAPPER);
    let stored = q.selection().unwrap().point;

    for wrapper in [
        PixelSize::new(400.0, 200.0),
        PixelSize::new(1000.0, 500.0),
        PixelSize::new(333.0, 166.5),
    ] {
        let placed = q.marker_placement(wrapper, marker).unwrap();
        let center = placed.center_percent(wrapper, marker);
        assert!((center.x - stored.x).abs() < 1e-9);
        assert!((center.y - stored.y).abs() < 1e-9);
    }
    assert_eq!(q.selection().unwrap().point, stored);
}

#[test]
fn test_show_solutions_selects_first_correct_center() {
    let mut q = question();
    let mut host = RecordingHost::default();

    q.show_solutions(&mut host);

    assert!(q.answer_given());
    assert_eq!(q.selection().unwrap().point, PercentPoint::new(55.0, 55.0));
    assert_eq!(q.score(), 1);

    // Already answered: a second call changes nothing.
    q.show_solutions(&mut host);
    assert_eq!(host.events.len(), 1);
}

fn question_with_hotspots(hotspots: &str) -> HotspotQuestion {
    let json = format!(
        r#"{{
            "imageHotspotQuestion": {{
                "backgroundImageSettings": {{ "path": "harbour.jpg" }},
                "hotspotSettings": {{ "hotspot": [{hotspots}] }}
            }}
        }}"#
    );
    HotspotQuestion::new(QuestionParams::from_json(&json).unwrap())
}

#[test]
fn test_show_solutions_ignores_earlier_overlapping_hotspot() {
    let mut q = question_with_hotspots(
        r#"
        {
            "computedSettings": { "x": 0, "y": 0, "width": 100, "height": 100 },
            "userSettings": { "correct": false, "feedbackText": "Background" }
        },
        {
            "computedSettings": { "x": 40, "y": 40, "width": 20, "height": 20 },
            "userSettings": { "correct": true, "feedbackText": "Lighthouse" }
        }"#,
    );
    let mut host = RecordingHost::default();

    q.show_solutions(&mut host);

    let selection = q.selection().unwrap();
    assert_eq!(selection.point, PercentPoint::new(50.0, 50.0));
    assert_eq!(selection.matched_hotspot, Some(1));
    assert_eq!(q.outcome().unwrap().kind, OutcomeKind::Correct);
    assert_eq!(q.score(), 1);
    assert!(!host.retry_visible);
    assert_eq!(host.feedback.as_ref().unwrap().text, "Lighthouse");
    assert!(host.events[0].success);
    assert_eq!(host.events[0].hotspot_index, Some(1));
}

#[test]
fn test_show_solutions_zero_size_correct_hotspot() {
    let mut q = question_with_hotspots(
        r#"
        {
            "computedSettings": { "x": 40, "y": 40, "width": 0, "height": 0 },
            "userSettings": { "correct": true }
        }"#,
    );
    let mut host = RecordingHost::default();

    q.show_solutions(&mut host);

    assert_eq!(q.selection().unwrap().matched_hotspot, Some(0));
    assert_eq!(q.selection().unwrap().point, PercentPoint::new(40.0, 40.0));
    assert_eq!(q.score(), 1);
    assert!(host.events[0].success);
}

#[test]
fn test_show_solutions_without_correct_hotspot_is_noop() {
    let mut q = question_with_hotspots(
        r#"
        {
            "computedSettings": { "x": 10, "y": 10, "width": 10, "height": 10 },
            "userSettings": { "correct": false }
        }"#,
    );
    let mut host = RecordingHost::default();

    q.show_solutions(&mut host);

    assert!(!q.answer_given());
    assert!(host.feedback.is_none());
    assert!(host.events.is_empty());
}

#[test]
fn test_missing_image_degrades_to_placeholder() {
    let mut q = HotspotQuestion::new(QuestionParams::default());
    let mut host = RecordingHost::default();

    assert!(!q.is_interactive());
    assert!(q.click(&mut host, ClickTarget::Wrapper, 1.0, 1.0, WRAPPER).is_none());
    q.show_solutions(&mut host);
    assert!(!q.answer_given());
    assert!(host.events.is_empty());
}
