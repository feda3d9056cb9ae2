//! The static celestial-body catalog.
//!
//! Pure reference data: the table is built into the binary and immutable for
//! the process lifetime. Descriptions are stored per language with English
//! guaranteed present for every body; physical attributes are optional
//! preformatted strings and their presence decides whether the matching UI
//! fragment renders at all.

use crate::i18n::{Language, Text};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BodyClass {
    Star,
    TerrestrialPlanet,
    GasGiant,
    IceGiant,
    DwarfPlanet,
}

impl BodyClass {
    pub fn label(self) -> &'static str {
        match self {
            BodyClass::Star => "Star",
            BodyClass::TerrestrialPlanet => "Terrestrial Planet",
            BodyClass::GasGiant => "Gas Giant",
            BodyClass::IceGiant => "Ice Giant",
            BodyClass::DwarfPlanet => "Dwarf Planet",
        }
    }
}

pub struct CelestialBody {
    /// Unique lowercase key, also the scene-style lookup key.
    pub id: &'static str,
    pub name: &'static str,
    pub class: BodyClass,
    /// Display color: fallback render color and UI accent.
    pub color: [u8; 3],
    /// `(language, text)` pairs; English is always present.
    pub descriptions: &'static [(Language, &'static str)],
    pub diameter: Option<&'static str>,
    pub mass: Option<&'static str>,
    pub gravity: Option<&'static str>,
    pub distance: Option<&'static str>,
    pub orbital_period: Option<&'static str>,
    pub rotation_period: Option<&'static str>,
    pub temperature: Option<&'static str>,
    pub moons: Option<&'static str>,
    pub atmosphere: Option<&'static str>,
}

impl CelestialBody {
    /// The description in `lang`, falling back to English when the
    /// translation is missing. Never empty.
    pub fn description(&self, lang: Language) -> &'static str {
        self.descriptions
            .iter()
            .find(|(l, _)| *l == lang)
            .or_else(|| self.descriptions.iter().find(|(l, _)| *l == Language::En))
            .map(|(_, text)| *text)
            .unwrap_or("")
    }

    /// Present physical attributes, in display order, paired with their
    /// label keys.
    pub fn characteristics(&self) -> Vec<(Text, &'static str)> {
        [
            (Text::Diameter, self.diameter),
            (Text::Mass, self.mass),
            (Text::Gravity, self.gravity),
            (Text::DistanceFromSun, self.distance),
            (Text::OrbitalPeriod, self.orbital_period),
            (Text::RotationPeriod, self.rotation_period),
            (Text::Temperature, self.temperature),
            (Text::Moons, self.moons),
            (Text::Atmosphere, self.atmosphere),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

/// Exact, case-sensitive lookup by display name.
pub fn body_by_name(name: &str) -> Option<&'static CelestialBody> {
    CATALOG.iter().find(|b| b.name == name)
}

pub fn body_by_id(id: &str) -> Option<&'static CelestialBody> {
    CATALOG.iter().find(|b| b.id == id)
}

pub static CATALOG: &[CelestialBody] = &[
    CelestialBody {
        id: "sun",
        name: "Sun",
        class: BodyClass::Star,
        color: [253, 184, 19],
        descriptions: &[(
            Language::En,
            "The Sun is the star at the center of the Solar System, a nearly \
             perfect sphere of hot plasma that provides the energy sustaining \
             life on Earth. It contains 99.86% of the system's mass.",
        )],
        diameter: Some("1,392,700 km"),
        mass: Some("1.989 × 10³⁰ kg"),
        gravity: Some("274 m/s²"),
        distance: None,
        orbital_period: None,
        rotation_period: Some("27 days (equator)"),
        temperature: Some("5,505 °C (surface)"),
        moons: None,
        atmosphere: Some("Hydrogen, helium"),
    },
    CelestialBody {
        id: "mercury",
        name: "Mercury",
        class: BodyClass::TerrestrialPlanet,
        color: [140, 120, 83],
        descriptions: &[
            (
                Language::En,
                "Mercury is the smallest planet in the Solar System and the \
                 closest to the Sun. Its surface is heavily cratered and \
                 experiences the most extreme temperature swings of any planet.",
            ),
            (
                Language::Fr,
                "Mercure est la plus petite planète du Système solaire et la \
                 plus proche du Soleil. Sa surface criblée de cratères subit \
                 les écarts de température les plus extrêmes de toutes les \
                 planètes.",
            ),
            (
                Language::Es,
                "Mercurio es el planeta más pequeño del Sistema Solar y el más \
                 cercano al Sol. Su superficie está cubierta de cráteres y \
                 sufre las variaciones de temperatura más extremas de todos \
                 los planetas.",
            ),
            (
                Language::It,
                "Mercurio è il pianeta più piccolo del Sistema Solare e il più \
                 vicino al Sole. La sua superficie craterizzata subisce le \
                 escursioni termiche più estreme di tutti i pianeti.",
            ),
        ],
        diameter: Some("4,879 km"),
        mass: Some("3.30 × 10²³ kg"),
        gravity: Some("3.7 m/s²"),
        distance: Some("57.9 million km"),
        orbital_period: Some("88 days"),
        rotation_period: Some("59 days"),
        temperature: Some("-173 to 427 °C"),
        moons: Some("0"),
        atmosphere: None,
    },
    CelestialBody {
        id: "venus",
        name: "Venus",
        class: BodyClass::TerrestrialPlanet,
        color: [255, 198, 73],
        descriptions: &[
            (
                Language::En,
                "Venus is the second planet from the Sun and the hottest in \
                 the Solar System, wrapped in a dense atmosphere of carbon \
                 dioxide that traps heat in a runaway greenhouse effect.",
            ),
            (
                Language::Fr,
                "Vénus est la deuxième planète à partir du Soleil et la plus \
                 chaude du Système solaire, enveloppée d'une atmosphère dense \
                 de dioxyde de carbone qui piège la chaleur par un effet de \
                 serre extrême.",
            ),
            (
                Language::Es,
                "Venus es el segundo planeta desde el Sol y el más caliente \
                 del Sistema Solar, envuelto en una densa atmósfera de dióxido \
                 de carbono que atrapa el calor en un efecto invernadero \
                 desbocado.",
            ),
            (
                Language::It,
                "Venere è il secondo pianeta dal Sole e il più caldo del \
                 Sistema Solare, avvolto da una densa atmosfera di anidride \
                 carbonica che intrappola il calore in un effetto serra \
                 estremo.",
            ),
        ],
        diameter: Some("12,104 km"),
        mass: Some("4.87 × 10²⁴ kg"),
        gravity: Some("8.9 m/s²"),
        distance: Some("108.2 million km"),
        orbital_period: Some("225 days"),
        rotation_period: Some("243 days (retrograde)"),
        temperature: Some("464 °C"),
        moons: Some("0"),
        atmosphere: Some("Carbon dioxide, nitrogen"),
    },
    CelestialBody {
        id: "earth",
        name: "Earth",
        class: BodyClass::TerrestrialPlanet,
        color: [65, 105, 225],
        descriptions: &[
            (
                Language::En,
                "Earth is the third planet from the Sun and the only known \
                 world to harbor life. Liquid water covers about 71% of its \
                 surface, and its atmosphere shields the biosphere from \
                 radiation.",
            ),
            (
                Language::Fr,
                "La Terre est la troisième planète à partir du Soleil et le \
                 seul monde connu à abriter la vie. L'eau liquide couvre \
                 environ 71 % de sa surface et son atmosphère protège la \
                 biosphère des radiations.",
            ),
            (
                Language::Es,
                "La Tierra es el tercer planeta desde el Sol y el único mundo \
                 conocido que alberga vida. El agua líquida cubre alrededor \
                 del 71 % de su superficie y su atmósfera protege la biosfera \
                 de la radiación.",
            ),
            (
                Language::It,
                "La Terra è il terzo pianeta dal Sole e l'unico mondo \
                 conosciuto ad ospitare la vita. L'acqua liquida copre circa \
                 il 71% della superficie e l'atmosfera protegge la biosfera \
                 dalle radiazioni.",
            ),
        ],
        diameter: Some("12,742 km"),
        mass: Some("5.97 × 10²⁴ kg"),
        gravity: Some("9.8 m/s²"),
        distance: Some("149.6 million km"),
        orbital_period: Some("365.25 days"),
        rotation_period: Some("23.9 hours"),
        temperature: Some("15 °C (average)"),
        moons: Some("1"),
        atmosphere: Some("Nitrogen, oxygen"),
    },
    CelestialBody {
        id: "mars",
        name: "Mars",
        class: BodyClass::TerrestrialPlanet,
        color: [205, 92, 92],
        descriptions: &[
            (
                Language::En,
                "Mars, the red planet, is a cold desert world with the largest \
                 volcano and the deepest canyon in the Solar System. Evidence \
                 suggests it once had liquid water on its surface.",
            ),
            (
                Language::Fr,
                "Mars, la planète rouge, est un monde désertique et froid qui \
                 abrite le plus grand volcan et le plus profond canyon du \
                 Système solaire. Des indices suggèrent qu'elle a autrefois \
                 porté de l'eau liquide.",
            ),
            (
                Language::Es,
                "Marte, el planeta rojo, es un mundo desértico y frío con el \
                 volcán más grande y el cañón más profundo del Sistema Solar. \
                 Las evidencias sugieren que alguna vez tuvo agua líquida en \
                 su superficie.",
            ),
            (
                Language::It,
                "Marte, il pianeta rosso, è un mondo desertico e freddo con il \
                 vulcano più grande e il canyon più profondo del Sistema \
                 Solare. Le prove suggeriscono che un tempo avesse acqua \
                 liquida in superficie.",
            ),
        ],
        diameter: Some("6,779 km"),
        mass: Some("6.42 × 10²³ kg"),
        gravity: Some("3.7 m/s²"),
        distance: Some("227.9 million km"),
        orbital_period: Some("687 days"),
        rotation_period: Some("24.6 hours"),
        temperature: Some("-63 °C (average)"),
        moons: Some("2"),
        atmosphere: Some("Carbon dioxide, thin"),
    },
    CelestialBody {
        id: "jupiter",
        name: "Jupiter",
        class: BodyClass::GasGiant,
        color: [218, 165, 32],
        descriptions: &[
            (
                Language::En,
                "Jupiter is the largest planet in the Solar System, a gas \
                 giant whose Great Red Spot is a storm larger than Earth that \
                 has raged for centuries.",
            ),
            (
                Language::Fr,
                "Jupiter est la plus grande planète du Système solaire, une \
                 géante gazeuse dont la Grande Tache rouge est une tempête \
                 plus vaste que la Terre qui fait rage depuis des siècles.",
            ),
            (
                Language::Es,
                "Júpiter es el planeta más grande del Sistema Solar, un \
                 gigante gaseoso cuya Gran Mancha Roja es una tormenta mayor \
                 que la Tierra que lleva siglos activa.",
            ),
            (
                Language::It,
                "Giove è il pianeta più grande del Sistema Solare, un gigante \
                 gassoso la cui Grande Macchia Rossa è una tempesta più estesa \
                 della Terra attiva da secoli.",
            ),
        ],
        diameter: Some("139,820 km"),
        mass: Some("1.90 × 10²⁷ kg"),
        gravity: Some("24.8 m/s²"),
        distance: Some("778.5 million km"),
        orbital_period: Some("11.9 years"),
        rotation_period: Some("9.9 hours"),
        temperature: Some("-108 °C (cloud tops)"),
        moons: Some("95"),
        atmosphere: Some("Hydrogen, helium"),
    },
    CelestialBody {
        id: "saturn",
        name: "Saturn",
        class: BodyClass::GasGiant,
        color: [244, 164, 96],
        descriptions: &[
            (
                Language::En,
                "Saturn is famous for its spectacular ring system, made of \
                 countless particles of ice and rock. It is the least dense \
                 planet — it would float in a large enough ocean of water.",
            ),
            (
                Language::Fr,
                "Saturne est célèbre pour son spectaculaire système \
                 d'anneaux, composé d'innombrables particules de glace et de \
                 roche. C'est la planète la moins dense du Système solaire.",
            ),
            (
                Language::Es,
                "Saturno es famoso por su espectacular sistema de anillos, \
                 formado por incontables partículas de hielo y roca. Es el \
                 planeta menos denso del Sistema Solar.",
            ),
            (
                Language::It,
                "Saturno è famoso per il suo spettacolare sistema di anelli, \
                 composto da innumerevoli particelle di ghiaccio e roccia. È \
                 il pianeta meno denso del Sistema Solare.",
            ),
        ],
        diameter: Some("116,460 km"),
        mass: Some("5.68 × 10²⁶ kg"),
        gravity: Some("10.4 m/s²"),
        distance: Some("1.43 billion km"),
        orbital_period: Some("29.5 years"),
        rotation_period: Some("10.7 hours"),
        temperature: Some("-139 °C (cloud tops)"),
        moons: Some("146"),
        atmosphere: Some("Hydrogen, helium"),
    },
    CelestialBody {
        id: "uranus",
        name: "Uranus",
        class: BodyClass::IceGiant,
        color: [79, 208, 231],
        descriptions: &[
            (
                Language::En,
                "Uranus is an ice giant that rotates on its side, likely the \
                 result of a colossal ancient impact. Its pale cyan color \
                 comes from methane in its atmosphere.",
            ),
            (
                Language::Fr,
                "Uranus est une géante de glace qui tourne sur le côté, \
                 probablement à la suite d'un impact colossal. Sa teinte cyan \
                 pâle provient du méthane de son atmosphère.",
            ),
            (
                Language::Es,
                "Urano es un gigante helado que gira de lado, probablemente a \
                 causa de un impacto colosal en el pasado. Su color cian \
                 pálido proviene del metano de su atmósfera.",
            ),
            (
                Language::It,
                "Urano è un gigante di ghiaccio che ruota su un fianco, \
                 probabilmente in seguito a un impatto colossale. Il suo \
                 colore ciano pallido deriva dal metano nell'atmosfera.",
            ),
        ],
        diameter: Some("50,724 km"),
        mass: Some("8.68 × 10²⁵ kg"),
        gravity: Some("8.9 m/s²"),
        distance: Some("2.87 billion km"),
        orbital_period: Some("84 years"),
        rotation_period: Some("17.2 hours (retrograde)"),
        temperature: Some("-197 °C"),
        moons: Some("28"),
        atmosphere: Some("Hydrogen, helium, methane"),
    },
    CelestialBody {
        id: "neptune",
        name: "Neptune",
        class: BodyClass::IceGiant,
        color: [65, 105, 225],
        descriptions: &[
            (
                Language::En,
                "Neptune is the most distant planet from the Sun and the \
                 windiest world in the Solar System, with gusts reaching \
                 2,100 km/h. It was the first planet located through \
                 mathematical prediction.",
            ),
            (
                Language::Fr,
                "Neptune est la planète la plus éloignée du Soleil et le \
                 monde le plus venteux du Système solaire, avec des rafales \
                 atteignant 2 100 km/h. Ce fut la première planète localisée \
                 par le calcul.",
            ),
            (
                Language::Es,
                "Neptuno es el planeta más lejano del Sol y el mundo más \
                 ventoso del Sistema Solar, con ráfagas de hasta 2 100 km/h. \
                 Fue el primer planeta localizado mediante predicción \
                 matemática.",
            ),
            (
                Language::It,
                "Nettuno è il pianeta più lontano dal Sole e il mondo più \
                 ventoso del Sistema Solare, con raffiche fino a 2 100 km/h. \
                 Fu il primo pianeta individuato tramite calcoli matematici.",
            ),
        ],
        diameter: Some("49,244 km"),
        mass: Some("1.02 × 10²⁶ kg"),
        gravity: Some("11.2 m/s²"),
        distance: Some("4.50 billion km"),
        orbital_period: Some("165 years"),
        rotation_period: Some("16.1 hours"),
        temperature: Some("-201 °C"),
        moons: Some("16"),
        atmosphere: Some("Hydrogen, helium, methane"),
    },
    CelestialBody {
        id: "pluto",
        name: "Pluto",
        class: BodyClass::DwarfPlanet,
        color: [160, 130, 109],
        descriptions: &[(
            Language::En,
            "Pluto is a dwarf planet in the Kuiper belt, demoted from planet \
             status in 2006. Despite its small size it has five known moons \
             and a surprisingly complex surface of nitrogen ice.",
        )],
        diameter: Some("2,377 km"),
        mass: Some("1.31 × 10²² kg"),
        gravity: Some("0.62 m/s²"),
        distance: Some("5.91 billion km"),
        orbital_period: Some("248 years"),
        rotation_period: Some("6.4 days (retrograde)"),
        temperature: Some("-232 °C"),
        moons: Some("5"),
        atmosphere: Some("Nitrogen, methane (thin)"),
    },
];
