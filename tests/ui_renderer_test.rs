use tasktrail::ui::core::EventHandler;

#[tokio::test]
async fn test_frame_budget() {
    let mut event_handler = EventHandler::new();

    // Just created, so the frame budget has not elapsed yet
    assert!(!event_handler.should_render());

    tokio::time::sleep(tokio::time::Duration::from_millis(17)).await;
    assert!(event_handler.should_render());

    event_handler.mark_rendered();
    assert!(!event_handler.should_render());
}
