use super::{BattleTemplate, LocalePack, SideTemplate};

pub const PACK: LocalePack = LocalePack {
    locale: "ja",
    templates: &[
        BattleTemplate {
            title: "駅前ラーメン対決",
            subtitle: "どちらの一杯が街を制するか",
            overview: "与野と狛江、それぞれの駅前に長年愛されるラーメン店がある。",
            scenario: "昼休みの行列の長さで勝負が決まる。",
            yono: SideTemplate {
                title: "与野の醤油ラーメン",
                subtitle: "昔ながらの味",
                description: "創業以来変わらないスープに常連が通い続ける。",
            },
            komae: SideTemplate {
                title: "狛江の味噌ラーメン",
                subtitle: "多摩川の恵み",
                description: "地元野菜をたっぷり使った一杯が自慢。",
            },
        },
        BattleTemplate {
            title: "桜の名所対決",
            subtitle: "春の主役はどちらだ",
            overview: "春になると両市の川沿いは花見客でにぎわう。",
            scenario: "満開の週末、より多くの人を集めた方が勝ち。",
            yono: SideTemplate {
                title: "与野公園のばら園",
                subtitle: "桜とばらの二本立て",
                description: "桜のあとにはばらまつりが控える欲張りな公園。",
            },
            komae: SideTemplate {
                title: "多摩川の桜並木",
                subtitle: "川風と花びら",
                description: "土手に座って眺める桜は格別だ。",
            },
        },
        BattleTemplate {
            title: "ゆるキャラ人気投票",
            subtitle: "かわいさは正義",
            overview: "地元のゆるキャラが人気投票で激突する。",
            scenario: "商店街のイベントで投票箱が用意された。",
            yono: SideTemplate {
                title: "与野のマスコット",
                subtitle: "ばらの妖精",
                description: "頭の上のばらがチャームポイント。",
            },
            komae: SideTemplate {
                title: "狛江のマスコット",
                subtitle: "えだまめの精",
                description: "いつもにこにこ、えだまめを配っている。",
            },
        },
    ],
};
