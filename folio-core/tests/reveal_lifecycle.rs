//! # 入场效果集成测试
//!
//! 模拟宿主驱动：可见性来源上报采样 → 触发器翻转 → 效果输出样式 / 数值。
//! 来源通过共享日志记录连接和断开，验证每次挂载的观察都被释放。

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::count_up::CountUpState;
use folio_core::reveal::{SplitText, Stagger};
use folio_core::visibility::TriggerState;
use folio_core::{
    CountUp, FadeReveal, Reveal, Rotator, Threshold, VisibilitySample, VisibilitySource,
    VisibilityTrigger,
};

/// 共享日志
#[derive(Debug, Default)]
struct ObserverLog {
    connected: u32,
    disconnected: u32,
}

/// 把连接 / 断开写进共享日志的来源
struct LoggingSource(Rc<RefCell<ObserverLog>>);

impl VisibilitySource for LoggingSource {
    fn connect(&mut self, _threshold: Threshold) {
        self.0.borrow_mut().connected += 1;
    }

    fn disconnect(&mut self) {
        self.0.borrow_mut().disconnected += 1;
    }
}

fn trigger(
    log: &Rc<RefCell<ObserverLog>>,
    threshold: Threshold,
) -> VisibilityTrigger<LoggingSource> {
    VisibilityTrigger::new(LoggingSource(Rc::clone(log)), threshold)
}

#[test]
fn test_fade_reveal_flow() {
    let log = Rc::new(RefCell::new(ObserverLog::default()));
    let fade = FadeReveal::default().delay(200).blur(true);
    let mut reveal = Reveal::new();
    let mut trigger = trigger(&log, Threshold::DEFAULT);

    let before = fade.style(reveal.is_revealed());
    assert!(before.contains("opacity: 0;"));
    assert!(before.contains("blur(8px)"));

    // 滚动中途多次上报
    for ratio in [0.0, 0.02, 0.08] {
        assert!(!trigger.report(VisibilitySample::new(ratio, ratio > 0.0)));
    }
    assert!(trigger.report(VisibilitySample::new(0.12, true)));
    assert!(reveal.reveal());
    assert!(!reveal.reveal());

    let after = fade.style(reveal.is_revealed());
    assert!(after.starts_with("opacity: 1; transform: none; filter: none;"));
    assert!(after.ends_with("200ms;"));

    // 触发时已经断开，卸载时不会再次断开
    drop(trigger);
    let log = log.borrow();
    assert_eq!((log.connected, log.disconnected), (1, 1));
}

#[test]
fn test_unmount_before_visible_releases_observer() {
    let log = Rc::new(RefCell::new(ObserverLog::default()));
    {
        let trigger = trigger(&log, Threshold::DEFAULT);
        assert_eq!(trigger.state(), TriggerState::Observing);
    }
    let log = log.borrow();
    assert_eq!((log.connected, log.disconnected), (1, 1));
}

#[test]
fn test_count_up_after_trigger() {
    let log = Rc::new(RefCell::new(ObserverLog::default()));
    let mut counter = CountUp::new(42).duration(2000).suffix("+");
    let mut trigger = trigger(&log, counter.threshold());

    // 只露出 30%，不触发
    assert!(!trigger.report(VisibilitySample::new(0.3, true)));
    assert_eq!(counter.state(), CountUpState::Idle);

    assert!(trigger.report(VisibilitySample::new(0.5, true)));
    assert!(counter.start(10_000));

    let mut last = 0;
    let mut now = 10_000;
    while now < 12_000 {
        now += 16;
        let value = counter.tick(now);
        assert!(value >= last);
        last = value;
    }
    assert_eq!(counter.value(), 42);
    assert!(counter.is_done());
    assert_eq!(counter.display(), "42+");

    // 再次触发不会重新计数
    assert!(!counter.start(20_000));
    assert_eq!(counter.tick(20_016), 42);
}

#[test]
fn test_split_text_completion_fires_once() {
    let split = SplitText::new("Hola mundo");
    let mut timer = split.completion_timer();
    // 9 个字符 + 1 个空格占位
    assert_eq!(split.completion_ms(), 50 * split.char_count() as u64 + 600);

    timer.arm(1_000);
    timer.arm(2_000);
    let deadline = timer.deadline().unwrap();
    assert_eq!(deadline, 1_000 + split.completion_ms());

    assert!(!timer.poll(deadline - 1));
    assert!(timer.poll(deadline));
    assert!(!timer.poll(deadline + 100));
}

#[test]
fn test_stagger_shares_one_trigger() {
    let log = Rc::new(RefCell::new(ObserverLog::default()));
    let stagger = Stagger::default();
    let mut trigger = trigger(&log, stagger.threshold());
    assert!(trigger.report(VisibilitySample::new(0.05, true)));

    let delays: Vec<u32> = (0..4).map(|i| stagger.item_delay(i)).collect();
    assert_eq!(delays, vec![0, 100, 200, 300]);
    assert_eq!(log.borrow().connected, 1);
}

#[test]
fn test_list_reveal_survives_leaving_viewport() {
    let log = Rc::new(RefCell::new(ObserverLog::default()));
    let stagger = Stagger::default();
    let mut trigger = trigger(&log, stagger.threshold());
    let mut reveal = Reveal::new();

    let styles = |reveal: &Reveal| -> Vec<String> {
        (0..3)
            .map(|i| stagger.item_style(i, reveal.is_revealed()))
            .collect()
    };
    assert!(styles(&reveal).iter().all(|s| s.starts_with("opacity: 0;")));

    for sample in [
        VisibilitySample::new(0.2, true),
        VisibilitySample::outside(),
        VisibilitySample::new(0.6, true),
    ] {
        if trigger.report(sample) {
            assert!(reveal.reveal());
        }
    }
    assert!(reveal.is_revealed());
    assert!(styles(&reveal).iter().all(|s| s.starts_with("opacity: 1;")));
    assert_eq!(log.borrow().disconnected, 1);
}

#[test]
fn test_rotator_cycle() {
    let mut rotator = Rotator::new(["A", "B", "C"], 3000)
        .unwrap()
        .starting_at(500);
    let mut seen = vec![rotator.current().to_string()];
    let mut now = 500;
    while now <= 500 + 9_400 {
        now += 100;
        if rotator.tick(now) && !rotator.is_transitioning() {
            seen.push(rotator.current().to_string());
        }
    }
    assert_eq!(seen, vec!["A", "B", "C", "A"]);
}
