//! TUI 应用状态定义
//!
//! 保存页面内容、滚动位置、动效状态与后台发送句柄

mod form_state;

pub use form_state::{ContactField, ContactFormState, SendState};

use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::content::{Profile, SectionId};
use crate::effects::{
    CounterAnimation, CursorTrail, GlitchEffect, KonamiDetector, ParallaxField, RainbowEffect,
    Reveal, RevealKind, RevealRegistry, ScrollState, Typewriter,
};
use crate::effects::reveal::{REVEAL_THRESHOLD, STAGGER_STEP_MS, TIMELINE_THRESHOLD};
use crate::errors::Result;
use crate::interfaces::tui::constants::{NAV_PROBE_ROWS, status_text};
use crate::mailer::{RelayConfig, RelayReceipt};
use crate::system::app_config::EffectsConfig;

/// 当前显示的界面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    /// 主页浏览
    Browse,
    /// 联系表单弹窗
    Contact,
    /// 帮助弹窗
    Help,
    /// 退出确认
    Exiting,
}

/// Page elements that animate in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealId {
    AboutIntro,
    Stat(usize),
    TimelineRow(usize),
    ProjectCard(usize),
}

/// What the mouse can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    NavLink(SectionId),
    StatCard(usize),
    ProjectCard(usize),
    ProjectLink(usize),
    SocialLink(usize),
    Email,
    ContactButton,
    FormField(ContactField),
}

/// A clickable screen region, rebuilt every frame.
#[derive(Debug, Clone, Copy)]
pub struct HoverZone {
    pub rect: Rect,
    pub target: HoverTarget,
}

/// Elapsed time fed to time-driven effects under reduced motion, large
/// enough to finish any of them in a single tick.
const INSTANT_MS: u64 = 60_000;

/// TUI 应用状态
pub struct App {
    /// 页面内容
    pub profile: Profile,
    /// ASCII 横幅,启动时加载一次
    pub banner: Vec<String>,
    /// 邮件中继配置
    pub relay: RelayConfig,
    /// 动效开关
    pub effects: EffectsConfig,
    /// 当前界面
    pub current_screen: CurrentScreen,
    /// 联系表单状态
    pub form: ContactFormState,
    /// 滚动状态
    pub scroll: ScrollState,
    /// 各区块在页面中的位置(每帧重建)
    pub sections: Vec<crate::effects::SectionExtent>,
    /// 当前激活的导航区块
    pub active_section: Option<SectionId>,
    /// 跟随光标
    pub cursor: CursorTrail,
    /// 标题故障抖动
    pub glitch: GlitchEffect,
    /// 秘技按键检测
    pub konami: KonamiDetector,
    /// 彩虹滤镜
    pub rainbow: RainbowEffect,
    /// 背景视差光球
    pub parallax: ParallaxField,
    /// 副标题打字机
    pub typewriter: Typewriter,
    /// 入场动画集合
    pub reveals: RevealRegistry<RevealId>,
    /// 统计数字动画,与 profile.stats 一一对应
    pub counters: Vec<CounterAnimation>,
    /// 可点击区域(每帧重建)
    pub hover_zones: Vec<HoverZone>,
    /// 鼠标当前悬停的目标
    pub hovered: Option<HoverTarget>,
    /// 弹出提示,按任意键关闭
    pub alert: Option<String>,
    /// 状态栏消息
    pub status_message: String,
    /// 状态栏错误
    pub error_message: String,
    /// 内容视口(每帧记录)
    pub viewport: Rect,
    /// 整页行数(每帧记录)
    pub page_height: u16,
    /// 启动以来的毫秒数
    pub clock_ms: u64,
    /// 入场淡入已播放的毫秒数
    pub intro_elapsed_ms: u64,
    /// 后台发送结果通道
    pub(crate) mail_rx: Option<oneshot::Receiver<Result<RelayReceipt>>>,
    rng: StdRng,
}

impl App {
    pub fn new(profile: Profile, relay: RelayConfig, effects: EffectsConfig) -> Self {
        let motion = !effects.reduced_motion;

        let mut reveals = RevealRegistry::new();
        reveals.register(
            RevealId::AboutIntro,
            Reveal::new(RevealKind::FadeUp, REVEAL_THRESHOLD),
        );
        for i in 0..profile.stats.len() {
            reveals.register(
                RevealId::Stat(i),
                Reveal::new(RevealKind::FadeUp, REVEAL_THRESHOLD)
                    .with_delay(i as u64 * STAGGER_STEP_MS),
            );
        }
        for i in 0..profile.timeline.len() {
            reveals.register(
                RevealId::TimelineRow(i),
                Reveal::new(RevealKind::SlideLeft, TIMELINE_THRESHOLD)
                    .with_delay(i as u64 * STAGGER_STEP_MS),
            );
        }
        for i in 0..profile.projects.len() {
            reveals.register(
                RevealId::ProjectCard(i),
                Reveal::new(RevealKind::FadeUp, REVEAL_THRESHOLD)
                    .with_delay(i as u64 * STAGGER_STEP_MS),
            );
        }

        let counters = profile
            .stats
            .iter()
            .map(|stat| CounterAnimation::new(stat.target))
            .collect();

        let typewriter = Typewriter::new(
            profile.subtitle_lines.clone(),
            effects.typewriter && motion,
        );

        let banner = crate::content::banner_art()
            .lines()
            .map(String::from)
            .collect();

        App {
            profile,
            banner,
            relay,
            effects,
            current_screen: CurrentScreen::Browse,
            form: ContactFormState::new(),
            scroll: ScrollState::new(),
            sections: Vec::new(),
            active_section: Some(SectionId::Home),
            cursor: CursorTrail::new(),
            glitch: GlitchEffect::new(),
            konami: KonamiDetector::new(),
            rainbow: RainbowEffect::new(),
            parallax: ParallaxField::with_default_orbs(),
            typewriter,
            reveals,
            counters,
            hover_zones: Vec::new(),
            hovered: None,
            alert: None,
            status_message: status_text::READY.to_string(),
            error_message: String::new(),
            viewport: Rect::default(),
            page_height: 0,
            clock_ms: 0,
            intro_elapsed_ms: 0,
            mail_rx: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// 设置状态消息(同时清除错误)
    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    /// 设置错误消息(同时清除状态)
    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    /// 秘技触发:重启彩虹滤镜
    pub fn trigger_rainbow(&mut self) {
        info!("Konami sequence detected, rainbow mode for 5 seconds");
        self.rainbow.activate();
        self.set_status(status_text::EASTER_EGG.to_string());
    }

    /// 命中检测:最后注册的区域优先
    pub fn target_at(&self, col: u16, row: u16) -> Option<HoverTarget> {
        let position = ratatui::layout::Position::new(col, row);
        self.hover_zones
            .iter()
            .rev()
            .find(|zone| zone.rect.contains(position))
            .map(|zone| zone.target)
    }

    /// 每帧推进所有时间驱动的状态
    pub fn on_tick(&mut self, elapsed_ms: u64) {
        self.clock_ms = self.clock_ms.wrapping_add(elapsed_ms);
        self.intro_elapsed_ms = self.intro_elapsed_ms.saturating_add(elapsed_ms);

        let motion = !self.effects.reduced_motion;
        // Reduced motion keeps every animation but lands it on its final
        // frame immediately.
        let effect_ms = if motion { elapsed_ms } else { INSTANT_MS };

        self.scroll.on_tick();

        if motion && self.effects.cursor_trail {
            self.cursor.on_tick();
        }
        if motion && self.effects.glitch {
            self.glitch.advance(elapsed_ms, &mut self.rng);
        }

        self.typewriter.advance(effect_ms);
        self.rainbow.advance(elapsed_ms);

        self.reveals
            .observe_viewport(self.scroll.offset(), self.viewport.height);
        self.reveals.advance_all(effect_ms);

        for (i, counter) in self.counters.iter_mut().enumerate() {
            if !counter.is_started() && self.reveals.progress(RevealId::Stat(i)) > 0.0 {
                counter.start();
            }
            counter.advance(effect_ms);
        }

        self.active_section =
            crate::effects::active_section(&self.sections, self.scroll.offset(), NAV_PROBE_ROWS);

        self.poll_mail_result();
    }

    /// 轮询后台发送结果
    ///
    /// Success clears the form and re-enables the button; failure keeps the
    /// typed fields and raises an alert instead.
    pub fn poll_mail_result(&mut self) {
        let Some(rx) = &mut self.mail_rx else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(receipt)) => {
                info!("Contact message accepted by relay: {}", receipt.status);
                self.form.reset_fields();
                self.form.send_state = SendState::Idle;
                self.set_status(status_text::SENT_OK.to_string());
                self.mail_rx = None;
            }
            Ok(Err(e)) => {
                warn!("Contact message rejected: {}", e);
                self.form.send_state = SendState::Idle;
                self.alert = Some(status_text::SEND_FAILED.to_string());
                self.set_error(e.message().to_string());
                self.mail_rx = None;
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                warn!("Contact send task dropped without reporting back");
                self.form.send_state = SendState::Idle;
                self.alert = Some(status_text::SEND_FAILED.to_string());
                self.set_error("send task dropped".to_string());
                self.mail_rx = None;
            }
        }
    }
}
