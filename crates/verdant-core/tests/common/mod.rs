#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const PLANT_DATA: &str = r#"// Mock data for the plant encyclopedia
export const mockPlants = [
  {
    id: 1,
    name: 'Monstera deliciosa',
    category: 'foliage',
    family: 'Araceae',
    image: '/images/monstera.jpg',
  },
  {
    id: 2,
    name: 'Boston fern',
    category: 'ferns',
    family: 'Nephrolepidaceae',
    image: '/images/fern.jpg',
  },
];

export const mockPlantDetails = {
  '1': { light: 'bright, indirect', water: 'weekly' },
  '2': { light: 'shade', water: 'keep moist' },
  '3': { light: 'sun', water: 'sparingly' },
};

export const mockRecognitionResults = [
  { plantId: 1, confidence: 0.92 },
];

export const reminderTypes = [
  { id: 'water', label: 'Water' },
  { id: 'fertilize', label: 'Fertilize' },
  { id: 'repot', label: 'Repot' },
  { id: 'prune', label: 'Prune' },
];
"#;

pub const APP: &str = r#"export default function App() {
  return (
    <Routes>
      <Route path="/home" element={<HomePage />} />
      <Route path="/search" element={<SearchPage />} />
      <Route path="/recognition" element={<RecognitionPage />} />
      <Route path="/reminder" element={<ReminderPage />} />
      <Route path="/plant/:id" element={<PlantDetailPage />} />
    </Routes>
  );
}
"#;

pub const STYLES: &str = ".plant-card { border-radius: 8px; }\n\
.search-box { display: flex; }\n\
.recognition-page { padding: 1rem; }\n\
.reminder-page { padding: 1rem; }\n\
.plant-detail-page { padding: 1rem; }\n";

pub const PAGES: &[(&str, &str)] = &[
    (
        "src/pages/HomePage.jsx",
        "const navigate = useNavigate();\n<button onClick={() => navigate('/search')} />",
    ),
    (
        "src/pages/SearchPage.jsx",
        "<SearchBox onSearch={run} onChange={setQuery} />",
    ),
    (
        "src/pages/RecognitionPage.jsx",
        "const startRecognition = () => {};\nconst handleImageSelect = (f) => {};",
    ),
    (
        "src/pages/ReminderPage.jsx",
        "const addReminder = () => {};\nconst deleteReminder = (id) => {};",
    ),
    (
        "src/pages/PlantDetailPage.jsx",
        "const { id } = useParams();\nconst navigate = useNavigate();",
    ),
];

pub const COMPONENTS: &[&str] = &[
    "src/components/ImageUploader.jsx",
    "src/components/PlantCard.jsx",
    "src/components/LoadingState.jsx",
];

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, content).expect("write fixture file");
}

pub fn remove(root: &Path, rel: &str) {
    fs::remove_file(root.join(rel)).expect("remove fixture file");
}

/// A project tree in which every check passes.
pub fn complete_project() -> TempDir {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "src/mock/plantData.js", PLANT_DATA);
    for component in COMPONENTS {
        write(root, component, "export default function C() { return null; }\n");
    }
    for (page, content) in PAGES {
        write(root, page, content);
    }
    write(root, "src/App.jsx", APP);
    write(root, "src/index.css", STYLES);
    temp
}
