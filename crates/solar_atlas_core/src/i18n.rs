//! UI languages and translation tables.
//!
//! Every user-facing string goes through [`tr`], which is total over
//! `(Language, Text)`: a missing translation cannot compile, so a raw key
//! can never leak into the interface. Per-body description fallback lives
//! in the catalog, not here.

/// Supported interface languages. [`Language::En`] is the fallback.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
    It,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Fr, Language::Es, Language::It];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::It => "it",
        }
    }

    /// Tolerant parse: case-insensitive, accepts region tags ("fr-CA"),
    /// and falls back to English for anything unrecognized.
    pub fn parse(value: &str) -> Language {
        let lang = value
            .trim()
            .to_ascii_lowercase()
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_string();
        match lang.as_str() {
            "fr" => Language::Fr,
            "es" => Language::Es,
            "it" => Language::It,
            _ => Language::En,
        }
    }
}

/// Keys for the interface strings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Text {
    Title,
    Subtitle,
    SearchHint,
    SearchButton,
    Searching,
    ViewDetails,
    ViewGallery,
    GalleryTitle,
    LoadMore,
    Loading,
    NotFound,
    Description,
    Characteristics,
    Diameter,
    Mass,
    Gravity,
    DistanceFromSun,
    OrbitalPeriod,
    RotationPeriod,
    Temperature,
    Moons,
    Atmosphere,
    PictureOfTheDay,
    PictureDate,
    Theme,
    LanguageName,
}

/// Returns the translation of `key` in `lang`.
pub fn tr(lang: Language, key: Text) -> &'static str {
    match lang {
        Language::En => tr_en(key),
        Language::Fr => tr_fr(key),
        Language::Es => tr_es(key),
        Language::It => tr_it(key),
    }
}

fn tr_en(key: Text) -> &'static str {
    match key {
        Text::Title => "NASA Space Explorer",
        Text::Subtitle => "Explore Our Solar System",
        Text::SearchHint => "Search a planet or celestial body...",
        Text::SearchButton => "Search",
        Text::Searching => "Searching...",
        Text::ViewDetails => "View Details",
        Text::ViewGallery => "View Gallery",
        Text::GalleryTitle => "Celestial Bodies Gallery",
        Text::LoadMore => "Load more",
        Text::Loading => "Loading...",
        Text::NotFound => "Celestial body not found",
        Text::Description => "Description",
        Text::Characteristics => "Characteristics",
        Text::Diameter => "Diameter",
        Text::Mass => "Mass",
        Text::Gravity => "Gravity",
        Text::DistanceFromSun => "Distance from Sun",
        Text::OrbitalPeriod => "Orbital Period",
        Text::RotationPeriod => "Rotation Period",
        Text::Temperature => "Temperature",
        Text::Moons => "Moons",
        Text::Atmosphere => "Atmosphere",
        Text::PictureOfTheDay => "Astronomy Picture of the Day",
        Text::PictureDate => "Date",
        Text::Theme => "Theme",
        Text::LanguageName => "Language",
    }
}

fn tr_fr(key: Text) -> &'static str {
    match key {
        Text::Title => "Explorateur Spatial NASA",
        Text::Subtitle => "Explorez Notre Système Solaire",
        Text::SearchHint => "Rechercher une planète ou un corps céleste...",
        Text::SearchButton => "Rechercher",
        Text::Searching => "Recherche...",
        Text::ViewDetails => "Voir Détails",
        Text::ViewGallery => "Voir Galerie",
        Text::GalleryTitle => "Galerie des Corps Célestes",
        Text::LoadMore => "Charger plus",
        Text::Loading => "Chargement...",
        Text::NotFound => "Corps céleste non trouvé",
        Text::Description => "Description",
        Text::Characteristics => "Caractéristiques",
        Text::Diameter => "Diamètre",
        Text::Mass => "Masse",
        Text::Gravity => "Gravité",
        Text::DistanceFromSun => "Distance du Soleil",
        Text::OrbitalPeriod => "Période Orbitale",
        Text::RotationPeriod => "Période de Rotation",
        Text::Temperature => "Température",
        Text::Moons => "Lunes",
        Text::Atmosphere => "Atmosphère",
        Text::PictureOfTheDay => "Image Astronomique du Jour",
        Text::PictureDate => "Date",
        Text::Theme => "Thème",
        Text::LanguageName => "Langue",
    }
}

fn tr_es(key: Text) -> &'static str {
    match key {
        Text::Title => "Explorador Espacial NASA",
        Text::Subtitle => "Explora Nuestro Sistema Solar",
        Text::SearchHint => "Buscar un planeta o cuerpo celeste...",
        Text::SearchButton => "Buscar",
        Text::Searching => "Buscando...",
        Text::ViewDetails => "Ver Detalles",
        Text::ViewGallery => "Ver Galería",
        Text::GalleryTitle => "Galería de Cuerpos Celestes",
        Text::LoadMore => "Cargar más",
        Text::Loading => "Cargando...",
        Text::NotFound => "Cuerpo celeste no encontrado",
        Text::Description => "Descripción",
        Text::Characteristics => "Características",
        Text::Diameter => "Diámetro",
        Text::Mass => "Masa",
        Text::Gravity => "Gravedad",
        Text::DistanceFromSun => "Distancia del Sol",
        Text::OrbitalPeriod => "Período Orbital",
        Text::RotationPeriod => "Período de Rotación",
        Text::Temperature => "Temperatura",
        Text::Moons => "Lunas",
        Text::Atmosphere => "Atmósfera",
        Text::PictureOfTheDay => "Imagen Astronómica del Día",
        Text::PictureDate => "Fecha",
        Text::Theme => "Tema",
        Text::LanguageName => "Idioma",
    }
}

fn tr_it(key: Text) -> &'static str {
    match key {
        Text::Title => "Esploratore Spaziale NASA",
        Text::Subtitle => "Esplora il Nostro Sistema Solare",
        Text::SearchHint => "Cerca un pianeta o corpo celeste...",
        Text::SearchButton => "Cerca",
        Text::Searching => "Ricerca...",
        Text::ViewDetails => "Vedi Dettagli",
        Text::ViewGallery => "Vedi Galleria",
        Text::GalleryTitle => "Galleria dei Corpi Celesti",
        Text::LoadMore => "Carica altro",
        Text::Loading => "Caricamento...",
        Text::NotFound => "Corpo celeste non trovato",
        Text::Description => "Descrizione",
        Text::Characteristics => "Caratteristiche",
        Text::Diameter => "Diametro",
        Text::Mass => "Massa",
        Text::Gravity => "Gravità",
        Text::DistanceFromSun => "Distanza dal Sole",
        Text::OrbitalPeriod => "Periodo Orbitale",
        Text::RotationPeriod => "Periodo di Rotazione",
        Text::Temperature => "Temperatura",
        Text::Moons => "Lune",
        Text::Atmosphere => "Atmosfera",
        Text::PictureOfTheDay => "Immagine Astronomica del Giorno",
        Text::PictureDate => "Data",
        Text::Theme => "Tema",
        Text::LanguageName => "Lingua",
    }
}
