use crate::quiz::Archetype;

/// Everything the result card and the oracle prompt need to know about one
/// spirit archetype.
#[derive(Debug, Clone, Copy)]
pub struct SpiritInfo {
    pub name: &'static str,
    pub story: &'static str,
    pub strength: &'static str,
    pub caution: &'static str,
    pub advice: [&'static str; 3],
    pub traits: [&'static str; 3],
    pub motto: &'static str,
}

/// Fixed descriptive content per archetype.
pub fn spirit_info(archetype: Archetype) -> &'static SpiritInfo {
    match archetype {
        Archetype::Autonomy => &AUTONOMY,
        Archetype::Competence => &COMPETENCE,
        Archetype::Relatedness => &RELATEDNESS,
        Archetype::Growth => &GROWTH,
    }
}

static AUTONOMY: SpiritInfo = SpiritInfo {
    name: "風芽精靈",
    story: "我在輕拂的樹葉聲中醒來，空氣裡的微風正呼喚我的名字。我不是一粒被定型的種子，而是隨風起舞的靈魂。森林很大，但我知道這雙新生的翅膀，只會飛往我心底真正想去的方向，在那裡，我能與最真實的自己重逢。",
    strength: "你擁有一顆不願被定義的心，這份自主是你最強大的羅盤。你擅長在紛擾中傾聽自己的節奏，當你聽從直覺行動時，你的靈魂會綻放出一種無可取代的光采。你的勇氣能打破陳規，在無人踏足的荒原中開闢出屬於你的祕徑。",
    caution: "當你飛得太遠，孤單的迷霧有時會悄悄襲來，讓你誤以為獨立就是孤立。請注意，拒絕被安排不代表自私，而是保留純粹的能量。但別因為害怕「被困住」，而拒絕了那些能為你提供溫暖與安穩的港灣。",
    advice: [
        "每週選一天完全不按計畫行事",
        "在筆記本寫下三個「我最想做」的純粹決定",
        "去一個從未去過的森林角落散步",
    ],
    traits: ["自主探索", "自由之翼", "獨特節奏"],
    motto: "風從不問方向，因為心在哪裡，路就在哪裡。",
};

static COMPETENCE: SpiritInfo = SpiritInfo {
    name: "鍛芽精靈",
    story: "我從堅硬岩石的縫隙中探出頭，手心跳動著不熄的火焰。我感覺體內蘊含著改造世界的渴望，每一次揮動翅膀，都是在確認自己的力量。我不畏懼高度，因為我深信雙手能鍛造出更堅韌的未來，在每一次磨礪中找到靈魂最真實的重量。",
    strength: "你追求卓越的意志是森林中最穩定的力量。你擅長透過實踐與學習來獲得掌控感，這份勝任感能讓你即便在暴雨中也能站穩腳跟。你對目標的堅持與專業，是同伴眼中最值得信賴的燈塔，你的進步就是整個森林的希望。",
    caution: "追求完美的火焰有時會變成沉重的枷鎖，讓你因一時的停滯而感到劇烈焦慮。迷霧中，別忘了你也是個需要休息的孩子。你的價值不只建立在成就之上，那些努力過的痕跡，本身就是最美的勳章。請練習在努力之餘也擁抱脆弱。",
    advice: [
        "將大挑戰拆解成三個微型勝利",
        "練習在挫折後對自己說「我已經盡力且很棒了」",
        "嘗試一項完全不計成敗的純粹愛好",
    ],
    traits: ["能力卓越", "突破自我", "目標導向"],
    motto: "最堅硬的磐石，也曾是一粒勇敢的種子。",
};

static RELATEDNESS: SpiritInfo = SpiritInfo {
    name: "光芽精靈",
    story: "當第一道暖光包圍我時，我聽見了森林深處溫柔的呼吸。我發現自己並不孤單，周圍每一片葉子的震動都與我息息相關。我伸出手，感受到彼此交會時產生的微熱。在愛與被愛的流動中，我終於找到了存在的意義，那是一種最深沉的平靜。",
    strength: "你天生擁有療癒他人的天賦，連結的力量是你靈魂最深的養分。你懂得傾聽風的低語，也能察覺夥伴眉間的陰影。這份共感力讓你成為森林的黏合劑，在守望相助中創造出最溫暖的奇蹟。你的存在本身，就是一份最美的安慰。",
    caution: "太過在意他人的感受，有時會讓你像被雨淋濕的翅膀，沉重得飛不起來。迷霧中，請分清他人的情緒與自己的界線。保護好自己的光，你才能在不消耗自己的情況下，繼續溫暖整片森林。記住，愛自己才是愛他人的起點。",
    advice: [
        "寫一封信給很久沒聯絡的知心好友",
        "練習在群體中勇敢說出自己的真實需求",
        "每天給予身邊的人一個真心且具體的讚美",
    ],
    traits: ["溫暖陪伴", "情感連結", "共感之光"],
    motto: "當我們交會時，整片森林都亮了起來。",
};

static GROWTH: SpiritInfo = SpiritInfo {
    name: "森芽精靈",
    story: "我在濕潤土壤的芬芳中緩慢睜開眼，感覺全身的纖維都在悄悄向上延伸。我並不完美，甚至有些青澀，但我享受這種持續蛻變的顫動。每一次失敗都像養分，滲進我的根系，讓我明白生命是一場沒有終點的航行，而我正走在更好的路上。",
    strength: "你擁有最珍貴的成長型思維，將變化視為生命的本質。你懂得在失敗中挖掘智慧，在時間的流轉中累積韌性。這份對未來的開放感，讓你無論身處何種季節，都能保有持續萌發的生命力。你的存在，證明了生命有無限的可能。",
    caution: "有時你會因為成長的緩慢而感到沮喪，或羨慕他人瞬間的綻放。迷霧中，請安靜聽聽內心發芽的聲音。每一棵參天大樹都曾是沉默的種子，你的累積從未白費，只是還在等待破土的時機。別讓焦慮偷走了你享受成長的樂趣。",
    advice: [
        "記錄下一件今天雖然失敗但學到的事",
        "找一位長輩或智者，聊聊生命中的轉折",
        "為自己種下一盆植物，觀察它緩慢生長的節奏",
    ],
    traits: ["持續蛻變", "學習熱情", "韌性成長"],
    motto: "不求瞬間綻放，但求日日生長。",
};
