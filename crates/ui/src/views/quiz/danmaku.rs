use dioxus::prelude::*;
use rand::Rng;
use rand::seq::IndexedRandom;

pub(super) const DANMAKU_COUNT: usize = 50;

const DANMAKU_TEXTS: &[&str] = &[
    "为祖国点亮地图！",
    "不忘初心",
    "牢记使命",
    "爱我中华",
    "繁荣昌盛",
    "国泰民安",
    "红色精神",
    "砥砺前行",
    "百年征程",
    "星火燎原",
    "伟大复兴",
    "万众一心",
    "团结奋斗",
    "历史是最好的教科书",
    "中国梦",
    "继往开来",
    "民主科学",
    "解放全华北",
    "打破神话",
    "伟大实践",
    "工业崛起",
    "改革先声",
    "扭转战局",
    "和平解放",
    "祖国统一",
    "创建人民军队",
    "农村改革序幕",
    "改革开放试验田",
    "枪杆子里出政权",
    "一国两制的伟大构想",
    "结束不能造车的历史",
    "打响武装反抗第一枪",
    "台湾是中国不可分割的一部分",
    "铁人精神",
];

const DANMAKU_COLORS: &[&str] = &[
    "rgba(192, 57, 43, 0.5)",
    "rgba(197, 162, 101, 0.6)",
    "rgba(169, 169, 169, 0.5)",
];

#[derive(Clone, Debug, PartialEq)]
pub(super) struct DanmakuItem {
    pub text: &'static str,
    pub color: &'static str,
    pub top_pct: f64,
    pub font_px: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl DanmakuItem {
    fn style(&self) -> String {
        format!(
            "color: {}; top: {:.2}%; font-size: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.color, self.top_pct, self.font_px, self.duration_secs, self.delay_secs
        )
    }
}

pub(super) fn generate_danmaku<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<DanmakuItem> {
    (0..count)
        .map(|_| DanmakuItem {
            text: DANMAKU_TEXTS.choose(rng).copied().unwrap_or_default(),
            color: DANMAKU_COLORS.choose(rng).copied().unwrap_or_default(),
            top_pct: rng.random_range(5.0..95.0),
            font_px: rng.random_range(14.0..24.0),
            duration_secs: rng.random_range(15.0..25.0),
            delay_secs: rng.random_range(0.0..20.0),
        })
        .collect()
}

/// Decorative phrases drifting behind the map. Generated once per mount.
#[component]
pub fn Danmaku() -> Element {
    let items = use_hook(|| generate_danmaku(&mut rand::rng(), DANMAKU_COUNT));

    rsx! {
        div { id: "danmaku-container", class: "danmaku-container",
            for (index, item) in items.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "danmaku-item",
                    style: item.style(),
                    "{item.text}"
                }
            }
        }
    }
}
