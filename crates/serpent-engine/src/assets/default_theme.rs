//! Built-in starter theme: Cantonese essentials on an amber palette.

use super::color::Rgba;
use super::theme::{Theme, VocabularyItem};

// (symbol, characters, jyutping, english)
const WORDS: &[(&str, &str, &str, &str)] = &[
    // Greetings
    ("👋", "你好", "nei5 hou2", "Hello"),
    ("🙏", "多謝", "do1 ze6", "Thank you (for gift)"),
    ("🤝", "唔該", "m4 goi1", "Thank you (service)"),
    ("🙇", "對唔住", "deoi3 m4 zyu6", "Sorry"),
    ("👋", "拜拜", "baai1 baai3", "Bye bye"),
    ("☀️", "早晨", "zou2 san4", "Good Morning"),
    ("🌙", "早抖", "zou2 tau2", "Good Night"),
    ("✅", "係", "hai6", "Yes / It is"),
    ("❌", "唔係", "m4 hai6", "No / Is not"),
    // Numbers
    ("1️⃣", "一", "jat1", "One"),
    ("2️⃣", "二", "ji6", "Two"),
    ("3️⃣", "三", "saam1", "Three"),
    ("4️⃣", "四", "sei3", "Four"),
    ("5️⃣", "五", "ng5", "Five"),
    ("6️⃣", "六", "luk6", "Six"),
    ("7️⃣", "七", "cat1", "Seven"),
    ("8️⃣", "八", "baat3", "Eight"),
    ("9️⃣", "九", "gau2", "Nine"),
    ("🔟", "十", "sap6", "Ten"),
    // Family
    ("👨", "爸爸", "baa4 baa1", "Father"),
    ("👩", "媽媽", "maa4 maa1", "Mother"),
    ("👦", "哥哥", "go4 go1", "Elder Brother"),
    ("👧", "家姐", "gaa1 ze2", "Elder Sister"),
    ("👶", "細路", "sai3 lou6", "Kid / Child"),
    // Dim sum and local food
    ("🥟", "蝦餃", "haa1 gaau2", "Shrimp Dumpling"),
    ("🥡", "燒賣", "siu1 maai2", "Siu Mai"),
    ("🥯", "叉燒包", "caa1 siu1 baau1", "BBQ Pork Bun"),
    ("🍮", "蛋撻", "daan6 taat1", "Egg Tart"),
    ("🥣", "粥", "zuk1", "Congee"),
    ("🍜", "雲吞麵", "wan4 tan1 min6", "Wonton Noodles"),
    ("🍡", "魚蛋", "jyu4 daan2", "Fishball"),
    ("🍞", "菠蘿包", "bo1 lo4 baau1", "Pineapple Bun"),
    ("🧇", "雞蛋仔", "gai1 daan6 zai2", "Egg Waffle"),
    ("🍚", "白飯", "baak6 faan6", "Rice"),
    ("🥢", "筷子", "faai3 zi2", "Chopsticks"),
    // Drinks
    ("🫖", "茶", "caa4", "Tea"),
    ("💧", "水", "seoi2", "Water"),
    ("☕", "咖啡", "gaa3 fe1", "Coffee"),
    ("🧋", "奶茶", "naai5 caa4", "Milk Tea"),
    // Fruit
    ("🍎", "蘋果", "ping4 gwo2", "Apple"),
    ("🍌", "香蕉", "hoeng1 ziu1", "Banana"),
    ("🍊", "橙", "caang2", "Orange"),
    ("🍉", "西瓜", "sai1 gwaa1", "Watermelon"),
    ("🥭", "芒果", "mong1 gwo2", "Mango"),
    // Animals
    ("🐱", "貓", "maau1", "Cat"),
    ("🐶", "狗", "gau2", "Dog"),
    ("🐦", "雀仔", "zoek3 zai2", "Bird"),
    ("🐷", "豬", "zyu1", "Pig"),
    ("🐮", "牛", "ngau4", "Cow"),
    ("🐔", "雞", "gai1", "Chicken"),
    ("🐟", "魚", "jyu2", "Fish"),
    ("🐯", "老虎", "lou5 fu2", "Tiger"),
    // Colors
    ("🔴", "紅色", "hung4 sik1", "Red"),
    ("🔵", "藍色", "laam4 sik1", "Blue"),
    ("🟢", "綠色", "luk6 sik1", "Green"),
    ("🟡", "黃色", "wong4 sik1", "Yellow"),
    // Verbs
    ("🍽️", "食", "sik6", "Eat"),
    ("🥤", "飲", "jam2", "Drink"),
    ("😴", "瞓覺", "fan3 gaau3", "Sleep"),
    ("🚶", "行", "haang4", "Walk"),
    ("👀", "睇", "tai2", "Look / Watch"),
    ("👂", "聽", "teng1", "Listen"),
    ("🗣️", "講", "gong2", "Speak"),
    ("🛒", "買", "maai5", "Buy"),
    // Adjectives
    ("👍", "好", "hou2", "Good"),
    ("🐘", "大", "daai6", "Big"),
    ("🐜", "細", "sai3", "Small"),
    ("🥵", "熱", "jit6", "Hot"),
    ("🥶", "凍", "dung3", "Cold"),
    ("😄", "開心", "hoi1 sam1", "Happy"),
    ("😋", "好食", "hou2 sik6", "Delicious"),
    // Places
    ("🏠", "屋企", "uk1 kei2", "Home"),
    ("🏫", "學校", "hok6 haau6", "School"),
    ("🏥", "醫院", "ji1 jyun2", "Hospital"),
    ("🚉", "地鐵", "dei6 tit3", "MTR / Subway"),
    ("🚌", "巴士", "baa1 si2", "Bus"),
    // Nature and time
    ("☀️", "太陽", "taai3 joeng4", "Sun"),
    ("🌧️", "雨", "jyu5", "Rain"),
    ("⛰️", "山", "saan1", "Mountain"),
    ("🌊", "海", "hoi2", "Sea"),
    ("📅", "今日", "gam1 jat6", "Today"),
    ("🕰️", "依家", "ji1 gaa1", "Now"),
];

/// The theme the game starts with before any generated theme is applied.
pub fn default_theme() -> Theme {
    Theme {
        name: "Cantonese Essentials".to_string(),
        head_color: Rgba::rgb(0xf5, 0x9e, 0x0b),       // amber-500
        body_color: Rgba::rgb(0xfb, 0xbf, 0x24),       // amber-400
        background_color: Rgba::rgb(0x1c, 0x19, 0x17), // stone-900
        particle_color: Rgba::rgb(0xfb, 0xbf, 0x24),
        vocabulary: WORDS
            .iter()
            .map(|&(symbol, target, phonetic, translation)| {
                VocabularyItem::new(symbol, target, phonetic, translation)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_passes_validation() {
        let theme = default_theme();
        let validated = Theme::from_spec(theme.to_spec()).unwrap();
        assert_eq!(validated, theme);
    }

    #[test]
    fn default_vocabulary_is_populated() {
        let theme = default_theme();
        assert!(theme.vocabulary.len() > 50);
        assert!(theme.vocabulary.iter().any(|v| v.target_text == "你好"));
    }
}
