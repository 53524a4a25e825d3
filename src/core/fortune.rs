//! Text generation for the draw and acknowledgment endpoints
//!
//! Every function here is pure apart from the RNG it is handed, so
//! callers decide where randomness comes from (thread-local in the
//! handlers, seeded in tests).

use rand::Rng;

/// Omikuji labels, best to worst
pub const OMIKUJI_LABELS: [&str; 10] = [
    "大吉", "中吉", "小吉", "吉", "半吉", "末吉", "末小吉", "凶", "小凶", "大凶",
];

/// Number of diagnosis templates
pub const DIAGNOSIS_COUNT: usize = 4;

/// Draw one omikuji label uniformly at random
pub fn draw_omikuji<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    OMIKUJI_LABELS[rng.gen_range(0..OMIKUJI_LABELS.len())]
}

/// Render diagnosis template `index` (taken modulo the template count)
pub fn diagnosis(index: usize, name: &str, thing: &str) -> String {
    match index % DIAGNOSIS_COUNT {
        0 => format!(
            "{name}さん、{thing}が好きなんですね！あなたは情熱的で、周りを明るくする太陽のような人です！"
        ),
        1 => format!(
            "{thing}が好きな{name}さんは、探求心が旺盛な冒険家タイプ！新しいことに挑戦するのが得意ですね。"
        ),
        2 => format!(
            "{name}さんが{thing}を選ぶとは、さすがです。あなたは冷静沈着な戦略家。物事をじっくり考えるのが好きですね。"
        ),
        _ => format!(
            "こんにちは、{name}さん！{thing}がお好きとは、優しい心の持ち主ですね。思いやりがあって、皆から好かれています。"
        ),
    }
}

/// All diagnoses for the given inputs, in template order
pub fn diagnoses(name: &str, thing: &str) -> Vec<String> {
    (0..DIAGNOSIS_COUNT)
        .map(|i| diagnosis(i, name, thing))
        .collect()
}

/// Pick one diagnosis uniformly at random
pub fn diagnose<R: Rng + ?Sized>(rng: &mut R, name: &str, thing: &str) -> String {
    diagnosis(rng.gen_range(0..DIAGNOSIS_COUNT), name, thing)
}

/// Acknowledge a present, naming the sender when there is one
pub fn present_message(present: &str, sender: Option<&str>) -> String {
    match sender {
        Some(sender) => format!(
            "サーバです。メリークリスマス！{sender}さんから {present}をありがとう。お返しはキャンディーです。"
        ),
        None => {
            format!("サーバです。メリークリスマス！{present}をありがとう。お返しはキャンディーです。")
        }
    }
}
