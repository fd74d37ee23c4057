//! 每帧热路径性能基准测试
//!
//! 滚动、动效推进与整帧渲染都跑在 16ms 的帧预算内，这里度量各自的开销。

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use termfolio::content::SectionId;
use termfolio::effects::{
    CounterAnimation, CursorTrail, GlitchEffect, KonamiDetector, Reveal, RevealKind,
    RevealRegistry, ScrollState, SectionExtent, Typewriter, active_section, rotate_rgb,
};
use termfolio::interfaces::tui::app::{App, CurrentScreen, RevealId};
use termfolio::interfaces::tui::constants::{NAV_PROBE_ROWS, TICK_RATE_MS};
use termfolio::interfaces::tui::event_handler::handle_key_event;
use termfolio::interfaces::tui::ui::ui;
use termfolio::mailer::RelayConfig;
use termfolio::system::app_config::EffectsConfig;

fn page_extents() -> Vec<SectionExtent> {
    vec![
        SectionExtent {
            id: SectionId::Home,
            top: 0,
            height: 60,
        },
        SectionExtent {
            id: SectionId::About,
            top: 60,
            height: 50,
        },
        SectionExtent {
            id: SectionId::Experience,
            top: 110,
            height: 40,
        },
        SectionExtent {
            id: SectionId::Projects,
            top: 150,
            height: 60,
        },
        SectionExtent {
            id: SectionId::Contact,
            top: 210,
            height: 40,
        },
    ]
}

fn bench_app() -> App {
    let profile = termfolio::content::load_default_profile().unwrap();
    let mut app = App::new(profile, RelayConfig::default(), EffectsConfig::default());
    app.sections = page_extents();
    app.viewport = Rect::new(0, 3, 100, 28);
    app.scroll.set_bounds(250, 28);
    app
}

// ============== 滚动与导航高亮 ==============

fn bench_scroll_tick(c: &mut Criterion) {
    c.bench_function("scroll/smooth_tick", |b| {
        let mut scroll = ScrollState::new();
        scroll.set_bounds(250, 40);
        b.iter(|| {
            scroll.animate_to(200.0);
            scroll.on_tick();
            scroll.snap_to(0.0);
        });
    });
}

fn bench_active_section(c: &mut Criterion) {
    let extents = page_extents();
    c.bench_function("scroll/active_section", |b| {
        let mut offset = 0.0f32;
        b.iter(|| {
            offset = (offset + 7.0) % 250.0;
            let section = active_section(&extents, offset, NAV_PROBE_ROWS);
            assert!(section.is_some() || offset > 247.0);
        });
    });
}

// ============== 按键序列检测 ==============

fn bench_konami_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("konami/feed");

    group.bench_function("miss", |b| {
        let mut detector = KonamiDetector::new();
        b.iter(|| {
            assert!(!detector.feed("x"));
        });
    });

    group.bench_function("near_hit", |b| {
        let mut detector = KonamiDetector::new();
        for key in ["ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft"] {
            detector.feed(key);
        }
        b.iter(|| {
            let _ = detector.feed("ArrowRight");
        });
    });

    group.finish();
}

// ============== 数字攀升与入场动画 ==============

fn bench_counter_tick(c: &mut Criterion) {
    c.bench_function("counter/advance_and_display", |b| {
        let mut counter = CounterAnimation::new(120);
        counter.start();
        b.iter(|| {
            counter.advance(TICK_RATE_MS);
            let shown = counter.display();
            assert!(!shown.is_empty());
        });
    });
}

fn bench_reveal_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal/registry_tick");

    for count in [4usize, 12, 24] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("reveals", count), &count, |b, &count| {
            let mut registry: RevealRegistry<usize> = RevealRegistry::new();
            for i in 0..count {
                registry.register(i, Reveal::new(RevealKind::FadeUp, 0.1));
                registry.set_extent(i, (i * 10) as u16, 5);
            }
            let mut offset = 0.0f32;
            b.iter(|| {
                offset = (offset + 3.0) % 200.0;
                registry.observe_viewport(offset, 40);
                registry.advance_all(TICK_RATE_MS);
            });
        });
    }
    group.finish();
}

// ============== 打字机与光标 ==============

fn bench_typewriter_rendered(c: &mut Criterion) {
    let lines = vec![
        "I build fast, reliable software for the web.".to_string(),
        "Lately I live in the terminal. So does this page.".to_string(),
    ];
    c.bench_function("typewriter/rendered_mid_typing", |b| {
        let mut tw = Typewriter::new(lines.clone(), true);
        tw.advance(1500);
        b.iter(|| {
            let rendered = tw.rendered();
            assert_eq!(rendered.len(), 2);
        });
    });
}

fn bench_cursor_trail(c: &mut Criterion) {
    c.bench_function("cursor/ease_tick", |b| {
        let mut cursor = CursorTrail::new();
        cursor.on_mouse_move(90, 30);
        b.iter(|| {
            cursor.on_tick();
            let _ = cursor.ring();
        });
    });
}

fn bench_glitch_advance(c: &mut Criterion) {
    c.bench_function("glitch/advance", |b| {
        let mut glitch = GlitchEffect::new();
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            glitch.advance(TICK_RATE_MS, &mut rng);
        });
    });
}

// ============== 彩虹滤镜的逐格色相旋转 ==============

fn bench_rainbow_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("rainbow/hue_rotate");

    group.bench_function("single_cell", |b| {
        b.iter(|| {
            let _ = rotate_rgb(0, 255, 245, 137.0);
        });
    });

    // 一整屏的量级:100x35 个前景色
    let cells = 100u64 * 35;
    group.throughput(Throughput::Elements(cells));
    group.bench_function("full_frame", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for i in 0..cells {
                let (r, g, b2) = rotate_rgb((i % 255) as u8, 120, 200, 90.0);
                acc = acc.wrapping_add(r as u32 + g as u32 + b2 as u32);
            }
            assert!(acc > 0);
        });
    });

    group.finish();
}

// ============== 应用级 tick 与整帧渲染 ==============

fn bench_app_on_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("app/on_tick");

    group.bench_function("at_rest", |b| {
        let mut app = bench_app();
        b.iter(|| {
            app.on_tick(TICK_RATE_MS);
        });
    });

    group.bench_function("everything_moving", |b| {
        let mut app = bench_app();
        for i in 0..app.profile.stats.len() {
            app.reveals.set_extent(RevealId::Stat(i), 70, 5);
        }
        app.scroll.snap_to(60.0);
        app.trigger_rainbow();
        app.cursor.on_mouse_move(50, 20);
        b.iter(|| {
            app.scroll.animate_to(200.0);
            app.on_tick(TICK_RATE_MS);
        });
    });

    group.finish();
}

fn bench_key_dispatch(c: &mut Criterion) {
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    c.bench_function("app/key_dispatch", |b| {
        let mut app = bench_app();
        b.iter(|| {
            let quit =
                handle_key_event(&mut app, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE))
                    .unwrap();
            assert!(!quit);
        });
    });
}

fn bench_full_frame_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/full_frame");

    group.bench_function("browse", |b| {
        let mut terminal = Terminal::new(TestBackend::new(100, 35)).unwrap();
        let mut app = bench_app();
        app.on_tick(TICK_RATE_MS);
        b.iter(|| {
            terminal.draw(|frame| ui(frame, &mut app)).unwrap();
        });
    });

    group.bench_function("browse_with_rainbow", |b| {
        let mut terminal = Terminal::new(TestBackend::new(100, 35)).unwrap();
        let mut app = bench_app();
        app.trigger_rainbow();
        app.on_tick(TICK_RATE_MS);
        b.iter(|| {
            terminal.draw(|frame| ui(frame, &mut app)).unwrap();
        });
    });

    group.bench_function("contact_popup", |b| {
        let mut terminal = Terminal::new(TestBackend::new(100, 35)).unwrap();
        let mut app = bench_app();
        app.current_screen = CurrentScreen::Contact;
        app.form.currently_editing =
            Some(termfolio::interfaces::tui::app::ContactField::Message);
        app.form.message_input = "A few lines\nof message text\nto lay out.".to_string();
        b.iter(|| {
            terminal.draw(|frame| ui(frame, &mut app)).unwrap();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scroll_tick,
    bench_active_section,
    bench_konami_feed,
    bench_counter_tick,
    bench_reveal_registry,
    bench_typewriter_rendered,
    bench_cursor_trail,
    bench_glitch_advance,
    bench_rainbow_sweep,
    bench_app_on_tick,
    bench_key_dispatch,
    bench_full_frame_render,
);
criterion_main!(benches);
