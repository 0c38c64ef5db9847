//
// Named QQ face emoji understood by the `set_msg_emoji_like` action.
// Ids below 1000 are QQ system faces, larger ids are Unicode code points.
//

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Emoji name to platform emoji id, in catalog order
pub const EMOJI_CATALOG: &[(&str, u32)] = &[
    ("得意", 4),
    ("流泪", 5),
    ("睡", 8),
    ("大哭", 9),
    ("尴尬", 10),
    ("调皮", 12),
    ("微笑", 14),
    ("酷", 16),
    ("可爱", 21),
    ("傲慢", 23),
    ("饥饿", 24),
    ("困", 25),
    ("惊恐", 26),
    ("流汗", 27),
    ("憨笑", 28),
    ("悠闲", 29),
    ("奋斗", 30),
    ("疑问", 32),
    ("嘘", 33),
    ("晕", 34),
    ("敲打", 38),
    ("再见", 39),
    ("发抖", 41),
    ("爱情", 42),
    ("跳跳", 43),
    ("拥抱", 49),
    ("蛋糕", 53),
    ("咖啡", 60),
    ("玫瑰", 63),
    ("爱心", 66),
    ("太阳", 74),
    ("月亮", 75),
    ("赞", 76),
    ("握手", 78),
    ("胜利", 79),
    ("飞吻", 85),
    ("西瓜", 89),
    ("冷汗", 96),
    ("擦汗", 97),
    ("抠鼻", 98),
    ("鼓掌", 99),
    ("糗大了", 100),
    ("坏笑", 101),
    ("左哼哼", 102),
    ("右哼哼", 103),
    ("哈欠", 104),
    ("委屈", 106),
    ("左亲亲", 109),
    ("可怜", 111),
    ("示爱", 116),
    ("抱拳", 118),
    ("拳头", 120),
    ("爱你", 122),
    ("NO", 123),
    ("OK", 124),
    ("转圈", 125),
    ("挥手", 129),
    ("喝彩", 144),
    ("棒棒糖", 147),
    ("茶", 171),
    ("泪奔", 173),
    ("无奈", 174),
    ("卖萌", 175),
    ("小纠结", 176),
    ("doge", 179),
    ("惊喜", 180),
    ("骚扰", 181),
    ("笑哭", 182),
    ("我最美", 183),
    ("点赞", 201),
    ("托脸", 203),
    ("托腮", 212),
    ("啵啵", 214),
    ("蹭一蹭", 219),
    ("抱抱", 222),
    ("拍手", 227),
    ("佛系", 232),
    ("喷脸", 240),
    ("甩头", 243),
    ("加油抱抱", 246),
    ("脑阔疼", 262),
    ("捂脸", 264),
    ("辣眼睛", 265),
    ("哦哟", 266),
    ("头秃", 267),
    ("问号脸", 268),
    ("暗中观察", 269),
    ("emm", 270),
    ("吃瓜", 271),
    ("呵呵哒", 272),
    ("我酸了", 273),
    ("汪汪", 277),
    ("汗", 278),
    ("无眼笑", 281),
    ("敬礼", 282),
    ("面无表情", 284),
    ("摸鱼", 285),
    ("哦", 287),
    ("睁眼", 289),
    ("敲开心", 290),
    ("摸锦鲤", 293),
    ("期待", 294),
    ("拜谢", 297),
    ("元宝", 298),
    ("牛啊", 299),
    ("右亲亲", 305),
    ("牛气冲天", 306),
    ("喵喵", 307),
    ("仔细分析", 314),
    ("加油", 315),
    ("崇拜", 318),
    ("比心", 319),
    ("庆祝", 320),
    ("拒绝", 322),
    ("吃糖", 324),
    ("生气", 326),
    ("晴天", 9728),
    ("闪光", 10024),
    ("错误", 10060),
    ("问号", 10068),
    ("苹果", 127822),
    ("草莓", 127827),
    ("拉面", 127836),
    ("面包", 127838),
    ("刨冰", 127847),
    ("啤酒", 127866),
    ("干杯", 127867),
    ("虫", 128027),
    ("牛", 128046),
    ("鲸鱼", 128051),
    ("猴", 128053),
    ("好的", 128076),
    ("厉害", 128077),
    ("内衣", 128089),
    ("男孩", 128102),
    ("爸爸", 128104),
    ("礼物", 128157),
    ("睡觉", 128164),
    ("水", 128166),
    ("吹气", 128168),
    ("肌肉", 128170),
    ("邮箱", 128235),
    ("火", 128293),
    ("呲牙", 128513),
    ("激动", 128514),
    ("高兴", 128516),
    ("嘿嘿", 128522),
    ("羞涩", 128524),
    ("哼哼", 128527),
    ("不屑", 128530),
    ("失落", 128532),
    ("淘气", 128540),
    ("吐舌", 128541),
    ("紧张", 128560),
    ("瞪眼", 128563),
];

static EMOJI_INDEX: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| EMOJI_CATALOG.iter().copied().collect());

/// Look up a catalog name. Exact, case-sensitive match
pub fn lookup(name: &str) -> Option<u32> {
    EMOJI_INDEX.get(name).copied()
}
