//! The fixed set of sections, in run order.

use super::{Collection, PageIdentifiers, Probe, RecordSample, Section};

pub const DATA_MODULE: &str = "src/mock/plantData.js";
pub const APP_MODULE: &str = "src/App.jsx";
pub const STYLESHEET: &str = "src/index.css";

pub const COMPONENTS: &[&str] = &[
    "src/components/ImageUploader.jsx",
    "src/components/PlantCard.jsx",
    "src/components/LoadingState.jsx",
];

const HOME_PAGE: &str = "src/pages/HomePage.jsx";
const SEARCH_PAGE: &str = "src/pages/SearchPage.jsx";
const RECOGNITION_PAGE: &str = "src/pages/RecognitionPage.jsx";
const REMINDER_PAGE: &str = "src/pages/ReminderPage.jsx";
const DETAIL_PAGE: &str = "src/pages/PlantDetailPage.jsx";

pub const PAGES: &[&str] = &[
    HOME_PAGE,
    SEARCH_PAGE,
    RECOGNITION_PAGE,
    REMINDER_PAGE,
    DETAIL_PAGE,
];

pub const PLANT_FIELDS: &[&str] = &["id", "name", "category", "family", "image"];

pub const ROUTES: &[&str] = &["/home", "/search", "/recognition", "/reminder", "/plant"];

pub const SELECTORS: &[&str] = &[
    ".plant-card",
    ".search-box",
    ".recognition-page",
    ".reminder-page",
    ".plant-detail-page",
];

/// Static section registry.
pub static SECTIONS: &[Section] = &[
    Section {
        id: "mock-data",
        icon: "📊",
        title: "Mock data integrity",
        failure_label: "Mock data failed to load",
        probe: Probe::DataModule {
            path: DATA_MODULE,
            collections: &[
                Collection {
                    export: "mockPlants",
                    label: "Plant records",
                },
                Collection {
                    export: "mockPlantDetails",
                    label: "Plant detail records",
                },
                Collection {
                    export: "mockRecognitionResults",
                    label: "Recognition results",
                },
                Collection {
                    export: "reminderTypes",
                    label: "Reminder types",
                },
            ],
            sample: RecordSample {
                export: "mockPlants",
                fields: PLANT_FIELDS,
                complete_label: "Plant record fields complete",
                missing_label: "Plant record is missing fields",
            },
        },
    },
    Section {
        id: "components",
        icon: "🔧",
        title: "Component files",
        failure_label: "Component check failed",
        probe: Probe::Exists { paths: COMPONENTS },
    },
    Section {
        id: "pages",
        icon: "📄",
        title: "Page files",
        failure_label: "Page check failed",
        probe: Probe::Exists { paths: PAGES },
    },
    Section {
        id: "routes",
        icon: "🛣️",
        title: "Route configuration",
        failure_label: "Route check failed",
        probe: Probe::Contains {
            path: APP_MODULE,
            tokens: ROUTES,
            complete_label: "All required routes configured",
            missing_label: "Missing routes",
        },
    },
    Section {
        id: "styles",
        icon: "🎨",
        title: "Stylesheet coverage",
        failure_label: "Style check failed",
        probe: Probe::Contains {
            path: STYLESHEET,
            tokens: SELECTORS,
            complete_label: "All required styles defined",
            missing_label: "Missing styles",
        },
    },
    Section {
        id: "handlers",
        icon: "🔘",
        title: "Interaction handlers",
        failure_label: "Handler check failed",
        probe: Probe::AllOf {
            pages: &[
                PageIdentifiers {
                    name: "HomePage",
                    path: HOME_PAGE,
                    identifiers: &["navigate", "onClick"],
                },
                PageIdentifiers {
                    name: "SearchPage",
                    path: SEARCH_PAGE,
                    identifiers: &["onSearch", "onChange"],
                },
                PageIdentifiers {
                    name: "RecognitionPage",
                    path: RECOGNITION_PAGE,
                    identifiers: &["startRecognition", "handleImageSelect"],
                },
                PageIdentifiers {
                    name: "ReminderPage",
                    path: REMINDER_PAGE,
                    identifiers: &["addReminder", "deleteReminder"],
                },
                PageIdentifiers {
                    name: "PlantDetailPage",
                    path: DETAIL_PAGE,
                    identifiers: &["useParams", "useNavigate"],
                },
            ],
        },
    },
];

/// Look up a section by id.
pub fn find(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}
