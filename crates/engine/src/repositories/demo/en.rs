use super::{BattleTemplate, LocalePack, SideTemplate};

pub const PACK: LocalePack = LocalePack {
    locale: "en",
    templates: &[
        BattleTemplate {
            title: "Ramen by the Station",
            subtitle: "Which bowl rules the town?",
            overview: "Both Yono and Komae have a beloved ramen shop right by the station.",
            scenario: "The longer lunchtime queue takes the crown.",
            yono: SideTemplate {
                title: "Yono Shoyu Ramen",
                subtitle: "The classic taste",
                description: "The same broth since opening day keeps the regulars coming.",
            },
            komae: SideTemplate {
                title: "Komae Miso Ramen",
                subtitle: "Gifts of the Tama river",
                description: "Piled high with vegetables from local farms.",
            },
        },
        BattleTemplate {
            title: "Cherry Blossom Face-Off",
            subtitle: "Who owns the spring?",
            overview: "Every spring the riverbanks of both cities fill with picnickers.",
            scenario: "Whoever draws the bigger crowd on peak weekend wins.",
            yono: SideTemplate {
                title: "Yono Park Rose Garden",
                subtitle: "Blossoms, then roses",
                description: "A greedy park that follows the cherry trees with a rose festival.",
            },
            komae: SideTemplate {
                title: "Tama Riverside Cherries",
                subtitle: "Petals on the breeze",
                description: "Nothing beats watching the blossoms from the embankment.",
            },
        },
        BattleTemplate {
            title: "Mascot Popularity Poll",
            subtitle: "Cuteness is justice",
            overview: "The local mascots face each other in a popularity vote.",
            scenario: "A ballot box has been set up at the shopping street fair.",
            yono: SideTemplate {
                title: "Yono Mascot",
                subtitle: "Fairy of the roses",
                description: "The rose on its head is its charm point.",
            },
            komae: SideTemplate {
                title: "Komae Mascot",
                subtitle: "Spirit of the edamame",
                description: "Always smiling and handing out edamame.",
            },
        },
    ],
};
