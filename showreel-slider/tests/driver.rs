use std::sync::{Arc, Mutex};
use std::time::Duration;

use showreel_slider::{
    DriverError, MemorySurface, SlideItem, Slider, SliderDriver, SliderInput,
    SliderOptions, TokioTimeProvider,
};

fn rotation(n: u64) -> Vec<SlideItem> {
    (0..n)
        .map(|i| SlideItem::new(i, format!("Title {i}"), "p.jpg", "Drama"))
        .collect()
}

#[tokio::test(start_paused = true)]
async fn autoplay_advances_on_the_driver_task() {
    let handle =
        SliderDriver::spawn_with(MemorySurface::new(), SliderOptions::default());
    handle.update_slides(rotation(3)).unwrap();

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.current_index, 0);
    assert_eq!(snapshot.len, 3);
    assert!(snapshot.autoplay_active);

    tokio::time::sleep(Duration::from_millis(5_001)).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.current_index, 1);
    assert!(snapshot.animating);

    tokio::time::sleep(Duration::from_millis(800)).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert!(!snapshot.animating);

    tokio::time::sleep(Duration::from_millis(10_000)).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.current_index, 0);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn inputs_are_forwarded() {
    let clicked = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&clicked);
    let slider = Slider::with_clock(
        MemorySurface::new(),
        SliderOptions {
            autoplay: false,
            ..SliderOptions::default()
        },
        Arc::new(TokioTimeProvider),
    )
    .on_slide_click(move |item| {
        *sink.lock().unwrap() = Some(item.title.clone());
    });

    let handle = SliderDriver::spawn(slider);
    handle.update_slides(rotation(4)).unwrap();
    handle.send(SliderInput::DotPressed(2)).unwrap();
    handle.send(SliderInput::SlideActivated(3)).unwrap();

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.current_index, 2);
    assert!(!snapshot.autoplay_active);
    assert_eq!(clicked.lock().unwrap().as_deref(), Some("Title 3"));
}

#[tokio::test(start_paused = true)]
async fn stopped_driver_reports_closed() {
    let handle =
        SliderDriver::spawn_with(MemorySurface::new(), SliderOptions::default());
    handle.stop();

    let result = handle.snapshot().await;
    assert!(matches!(result, Err(DriverError::Closed)));

    tokio::task::yield_now().await;
    assert!(handle.is_finished());
    assert!(matches!(
        handle.send(SliderInput::NextArrow),
        Err(DriverError::Closed)
    ));
}
