//! Drives each ruler with a short scripted gesture and prints what a renderer
//! would draw. Run with `RUST_LOG=ruler=debug` for the gesture trace.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use ruler_ui::prelude::*;
use ruler_ui::{format_hh_mm, format_hh_mm_ss, PointerEvent, TickWindow, TimeInterval};

const FRAME: Duration = Duration::from_millis(16);
const VIEWPORT: f32 = 360.0;

/// Feeds pointer events on a 16 ms cadence and pumps frames until idle.
struct Script {
    now_ms: i64,
}

impl Script {
    fn new() -> Self {
        Self { now_ms: 0 }
    }

    fn tick(&mut self) -> i64 {
        self.now_ms += FRAME.as_millis() as i64;
        self.now_ms
    }

    fn swipe(&mut self, control: &mut impl RulerControl, from: f32, to: f32, steps: u32) {
        let t = self.tick();
        control.handle_pointer(&PointerEvent::down(1, from, 0.0, t));
        for step in 1..=steps {
            let x = from + (to - from) * step as f32 / steps as f32;
            let t = self.tick();
            control.handle_pointer(&PointerEvent::moved(1, x, 0.0, t));
        }
        let t = self.tick();
        control.handle_pointer(&PointerEvent::up(1, to, 0.0, t));
        self.settle(control);
    }

    /// Pinches around `center`, changing the finger span from `from` to `to`.
    fn pinch(&mut self, control: &mut impl RulerControl, center: f32, from: f32, to: f32) {
        let t = self.tick();
        control.handle_pointer(&PointerEvent::down(1, center - from / 2.0, 0.0, t));
        let t = self.tick();
        control.handle_pointer(&PointerEvent::down(2, center + from / 2.0, 0.0, t));
        let steps = 8;
        let mut span = from;
        for step in 1..=steps {
            span = from + (to - from) * step as f32 / steps as f32;
            let t = self.tick();
            control.handle_pointer(&PointerEvent::moved(1, center - span / 2.0, 0.0, t));
            control.handle_pointer(&PointerEvent::moved(2, center + span / 2.0, 0.0, t));
        }
        let t = self.tick();
        control.handle_pointer(&PointerEvent::up(2, center + span / 2.0, 0.0, t));
        let t = self.tick();
        control.handle_pointer(&PointerEvent::up(1, center - span / 2.0, 0.0, t));
    }

    fn settle(&mut self, control: &mut impl RulerControl) {
        let mut frames = 0;
        while control.is_animating() {
            control.advance(FRAME);
            self.tick();
            frames += 1;
        }
        log::info!("settled after {frames} frames");
    }
}

fn print_ticks(title: &str, ticks: &TickWindow) {
    println!("{title}");
    for tick in ticks.iter().filter(|tick| tick.label.is_some() || tick.is_marker) {
        let marker = if tick.is_marker { " <- balance" } else { "" };
        println!(
            "  {:>8.1}px  {}{}",
            tick.pixel_offset,
            tick.label.as_deref().unwrap_or("|"),
            marker
        );
    }
}

fn number_demo(script: &mut Script) -> Result<()> {
    let mut ruler = NumberRuler::new(NumberRulerConfig::default().range(0.0, 100.0, 50.0))?;
    let changes = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&changes);
    ruler.on_value_changed(move |_| counter.set(counter.get() + 1));

    println!("== number ruler: start at {}", ruler.value());
    script.swipe(&mut ruler, 300.0, 100.0, 10);
    println!("slow drag left  -> {}", ruler.value());
    script.swipe(&mut ruler, 100.0, 340.0, 3);
    println!("fling right     -> {}", ruler.value());

    ruler.set_current_value(75.5)?;
    script.settle(&mut ruler);
    println!("scroll to 75.5  -> {} ({} notifications)", ruler.value(), changes.get());
    print_ticks("ticks:", &ruler.visible_ticks(VIEWPORT));
    Ok(())
}

fn money_demo(script: &mut Script) -> Result<()> {
    let mut ruler = MoneyRuler::new(MoneyRulerConfig::default().balance(12_345))?;
    println!("== money ruler: balance {}", ruler.balance());
    ruler.set_value(15_050.0);
    println!("set 15050       -> {}", ruler.value());
    script.swipe(&mut ruler, 200.0, 140.0, 6);
    println!("drag left       -> {}", ruler.value());
    print_ticks("ticks:", &ruler.visible_ticks(VIEWPORT));
    Ok(())
}

fn time_demo(script: &mut Script) -> Result<()> {
    let mut ruler = TimeRuler::new(TimeRulerConfig::default().current_time(9 * 3_600))?;
    ruler.set_time_intervals(vec![
        TimeInterval::new(8 * 3_600, 9 * 3_600 + 900)?,
        TimeInterval::new(8 * 3_600 + 1_800, 8 * 3_600 + 2_700)?,
    ]);
    println!("== time ruler: {}", format_hh_mm_ss(ruler.current_time()));

    script.pinch(&mut ruler, 180.0, 200.0, 50.0);
    println!(
        "pinch in        -> scale {:.3}, {}s ticks, time {}",
        ruler.scale(),
        ruler.unit_seconds(),
        format_hh_mm_ss(ruler.current_time())
    );
    script.swipe(&mut ruler, 200.0, 120.0, 8);
    println!("drag left       -> {}", format_hh_mm_ss(ruler.current_time()));

    print_ticks("ticks:", &ruler.visible_ticks(VIEWPORT));
    for span in ruler.visible_intervals(VIEWPORT) {
        println!(
            "  interval {}-{}: {:.1}px..{:.1}px",
            format_hh_mm(span.interval.start_time()),
            format_hh_mm(span.interval.end_time()),
            span.start_px,
            span.end_px
        );
    }
    Ok(())
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut script = Script::new();
    let result = number_demo(&mut script)
        .and_then(|()| money_demo(&mut script))
        .and_then(|()| time_demo(&mut script));
    if let Err(err) = result {
        eprintln!("demo failed: {err}");
        std::process::exit(1);
    }
}
