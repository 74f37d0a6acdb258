use super::{BattleTemplate, LocalePack, SideTemplate};

pub const PACK: LocalePack = LocalePack {
    locale: "de",
    templates: &[
        BattleTemplate {
            title: "Ramen am Bahnhof",
            subtitle: "Welche Schüssel regiert die Stadt?",
            overview: "Yono und Komae haben beide einen beliebten Ramen-Laden direkt am Bahnhof.",
            scenario: "Die längere Schlange zur Mittagszeit gewinnt.",
            yono: SideTemplate {
                title: "Yono Shoyu-Ramen",
                subtitle: "Der klassische Geschmack",
                description: "Seit dem ersten Tag dieselbe Brühe, und die Stammgäste bleiben.",
            },
            komae: SideTemplate {
                title: "Komae Miso-Ramen",
                subtitle: "Gaben des Tama-Flusses",
                description: "Hoch beladen mit Gemüse von den Höfen der Umgebung.",
            },
        },
        BattleTemplate {
            title: "Kirschblüten-Duell",
            subtitle: "Wem gehört der Frühling?",
            overview: "Jeden Frühling füllen sich die Flussufer beider Städte mit Picknickgästen.",
            scenario: "Wer am Höhepunkt-Wochenende mehr Besucher anzieht, gewinnt.",
            yono: SideTemplate {
                title: "Rosengarten im Yono-Park",
                subtitle: "Erst Blüten, dann Rosen",
                description: "Ein gieriger Park, der nach den Kirschen ein Rosenfest feiert.",
            },
            komae: SideTemplate {
                title: "Kirschen am Tama-Ufer",
                subtitle: "Blütenblätter im Wind",
                description: "Nichts geht über den Blick vom Deich auf die Blüten.",
            },
        },
        BattleTemplate {
            title: "Maskottchen-Wahl",
            subtitle: "Niedlichkeit siegt",
            overview: "Die örtlichen Maskottchen treten in einer Beliebtheitswahl gegeneinander an.",
            scenario: "Auf dem Straßenfest steht eine Wahlurne bereit.",
            yono: SideTemplate {
                title: "Yono-Maskottchen",
                subtitle: "Die Rosenfee",
                description: "Die Rose auf dem Kopf ist sein Markenzeichen.",
            },
            komae: SideTemplate {
                title: "Komae-Maskottchen",
                subtitle: "Geist der Edamame",
                description: "Lächelt immer und verteilt Edamame.",
            },
        },
    ],
};
