#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use swipeout_core::{Delta, Duration, Instant, Measurement, Side};
use swipeout_widgets::{ActionButton, OpenSide, Swipeout, SwipeoutConfig};

#[derive(Debug, Arbitrary)]
enum Step {
    Grant,
    Move { dx: i16, dy: i16 },
    Release { dx: i16 },
    Cancel { dx: i16 },
    OpenLeft,
    OpenRight,
    Close,
    Press { right: bool, index: u8 },
    Layout { width: u16, height: u8 },
    SetRight(u8),
    Tick(u16),
    Remount,
}

#[derive(Debug, Arbitrary)]
struct Input {
    left: u8,
    right: u8,
    width: u16,
    button_width: u8,
    auto_close: bool,
    auto_open: bool,
    drag_to_cta: bool,
    steps: Vec<Step>,
}

fn buttons(n: u8) -> Vec<ActionButton> {
    (0..n % 5).map(|i| ActionButton::label(format!("{i}"))).collect()
}

fuzz_target!(|input: Input| {
    if input.steps.len() > 256 {
        return;
    }
    let Ok(config) = SwipeoutConfig::builder()
        .left(buttons(input.left))
        .right(buttons(input.right))
        .button_width(f32::from(input.button_width))
        .auto_close(input.auto_close)
        .auto_open_left(input.auto_open)
        .auto_open_right(input.auto_open)
        .drag_to_cta(input.drag_to_cta)
        .on_cta(|| {})
        .build()
    else {
        return;
    };

    let width = f32::from(input.width);
    let mut row =
        Swipeout::new(config).with_measure(move || Some(Measurement::from_size(width, 48.0)));
    let mut now = Instant::now();
    row.mount(now);

    for step in &input.steps {
        match *step {
            Step::Grant => row.on_grant(now),
            Step::Move { dx, dy } => row.on_move(Delta::new(f32::from(dx), f32::from(dy)), now),
            Step::Release { dx } => row.on_release(Delta::horizontal(f32::from(dx)), now),
            Step::Cancel { dx } => row.on_cancel(Delta::horizontal(f32::from(dx)), now),
            Step::OpenLeft => row.open_at(Side::Left, now),
            Step::OpenRight => row.open_at(Side::Right, now),
            Step::Close => row.close_at(now),
            Step::Press { right, index } => {
                let side = if right { Side::Right } else { Side::Left };
                let _ = row.press(side, usize::from(index % 6), now);
            }
            Step::Layout { width, height } => row.on_layout(f32::from(width), f32::from(height)),
            Step::SetRight(n) => row.set_actions(Side::Right, buttons(n), now),
            Step::Tick(ms) => {
                now += Duration::from_millis(u64::from(ms));
                row.poll_timers(now);
            }
            Step::Remount => {
                row.unmount();
                row.mount(now);
            }
        }

        let state = row.state();
        assert!(state.content_offset.is_finite(), "offset not finite");
        if !state.dragging {
            assert!(state.sign_consistent(), "sign disagrees with open side");
            match state.open_side {
                OpenSide::Right => assert_eq!(state.content_offset, -state.panels.right_width),
                OpenSide::Left => assert_eq!(state.content_offset, state.panels.left_width),
                OpenSide::None => {}
            }
        }

        let frame = row.frame(now);
        assert!(frame.content_translate.is_finite(), "translate not finite");
        assert!(
            !(frame.left.visible && frame.right.visible),
            "both panels visible"
        );
    }
});
