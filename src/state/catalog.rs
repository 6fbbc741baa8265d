//! The gallery catalog
//!
//! Ships with a built-in set of projects and artworks. A JSON file can
//! replace the projects (and optionally the artworks) without rebuilding:
//!
//! ```json
//! {
//!   "projects": [
//!     { "id": "p1", "title": "...", "category": "UI", "thumbnail": "p1.jpg",
//!       "images": ["p1-a.jpg"], "description": "...", "tags": ["App"], "year": 2024 }
//!   ],
//!   "artworks": []
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::data::{Artwork, Project, ProjectCategory};
use crate::error::{GalleryError, Result};

/// Everything the gallery can display. Immutable once loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub projects: Vec<Project>,
    #[serde(default)]
    pub artworks: Vec<Artwork>,
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        Self {
            projects: builtin_projects(),
            artworks: builtin_artworks(),
        }
    }

    /// Load a catalog file. Missing artworks fall back to the built-in set.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw, path)
    }

    fn from_json(raw: &str, path: &Path) -> Result<Self> {
        let mut catalog: Catalog = serde_json::from_str(raw).map_err(|source| GalleryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if catalog.projects.is_empty() {
            return Err(GalleryError::EmptyCatalog(path.to_path_buf()));
        }
        if catalog.artworks.is_empty() {
            catalog.artworks = builtin_artworks();
        }
        Ok(catalog)
    }

    /// Load `path` when given, falling back to the built-in catalog on any error
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };

        match Self::load(path) {
            Ok(catalog) => {
                log::info!(
                    "📚 Loaded catalog {}: {} projects, {} artworks",
                    path.display(),
                    catalog.projects.len(),
                    catalog.artworks.len()
                );
                catalog
            }
            Err(e) => {
                log::warn!("⚠️  {e}; using built-in catalog");
                Self::builtin()
            }
        }
    }

    /// Earliest and latest artwork years, for the timeline
    pub fn artwork_years(&self) -> Option<(i32, i32)> {
        let min = self.artworks.iter().map(|a| a.year).min()?;
        let max = self.artworks.iter().map(|a| a.year).max()?;
        Some((min, max))
    }
}

fn project(
    id: &str,
    title: &str,
    category: ProjectCategory,
    images: &[&str],
    description: &str,
    tags: &[&str],
    year: i32,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        category,
        thumbnail: format!("projects/{id}/cover.jpg"),
        images: images
            .iter()
            .map(|name| format!("projects/{id}/{name}"))
            .collect(),
        description: Some(description.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        year: Some(year),
    }
}

fn builtin_projects() -> Vec<Project> {
    use ProjectCategory::*;

    vec![
        project(
            "ui-finance",
            "轻记账 App 界面",
            Ui,
            &["01.jpg", "02.jpg", "03.jpg"],
            "面向年轻用户的记账应用，强调一屏完成记录与清晰的月度回顾。",
            &["App", "移动端", "数据可视化"],
            2024,
        ),
        project(
            "poster-jazz",
            "夏夜爵士音乐节海报",
            Graphic,
            &["01.jpg", "02.jpg"],
            "以铜管乐器的曲线为骨架，用三色套印营造复古的演出氛围。",
            &["海报", "活动", "排版"],
            2023,
        ),
        project(
            "brand-tea",
            "山间茶舍品牌识别",
            Brand,
            &["01.jpg", "02.jpg", "03.jpg", "04.jpg"],
            "从茶山梯田中提取标志图形，延展至包装、门头与周边物料。",
            &["标志", "包装", "VI"],
            2024,
        ),
        project(
            "illust-seasons",
            "二十四节气插画",
            Illustration,
            &["01.jpg", "02.jpg", "03.jpg"],
            "一组以节气为题的水彩插画，记录城市里容易被忽略的季节变化。",
            &["水彩", "系列", "节气"],
            2022,
        ),
        project(
            "ui-dashboard",
            "运维监控仪表盘",
            Ui,
            &["01.jpg", "02.jpg"],
            "为夜间值班场景设计的深色仪表盘，告警信息按紧急程度分层呈现。",
            &["Web", "仪表盘", "深色模式"],
            2023,
        ),
        project(
            "book-cover",
            "城市散文集书籍装帧",
            Graphic,
            &["01.jpg", "02.jpg"],
            "以地铁线路图为灵感的封面系统，每一册对应一条线路的颜色。",
            &["书籍", "装帧"],
            2022,
        ),
        project(
            "brand-bakery",
            "街角面包房品牌升级",
            Brand,
            &["01.jpg", "02.jpg", "03.jpg"],
            "保留老店手写招牌的温度，重新梳理字体、色彩与包装规范。",
            &["品牌升级", "字体", "包装"],
            2025,
        ),
        project(
            "illust-picturebook",
            "《月亮邮差》绘本",
            Illustration,
            &["01.jpg", "02.jpg", "03.jpg", "04.jpg"],
            "讲述月亮在夜里为动物们送信的故事，全书采用有限的蓝金配色。",
            &["绘本", "儿童", "叙事"],
            2024,
        ),
        project(
            "ui-museum",
            "博物馆导览小程序",
            Ui,
            &["01.jpg", "02.jpg", "03.jpg"],
            "结合室内定位的展品导览，支持语音讲解与个人参观路线收藏。",
            &["小程序", "导览", "无障碍"],
            2025,
        ),
    ]
}

fn artwork(id: &str, title: &str, artist: &str, year: i32, image: &str, width: f32, height: f32) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        year,
        image: image.to_string(),
        width,
        height,
    }
}

fn builtin_artworks() -> Vec<Artwork> {
    vec![
        artwork("1", "读书的女子", "约翰内斯·维米尔", 1665, "artworks/1.jpg", 320.0, 400.0),
        artwork("2", "黑衣绅士肖像", "伦勃朗·凡·莱因", 1634, "artworks/2.jpg", 280.0, 360.0),
        artwork("3", "沉思的哲学家", "伦勃朗·凡·莱因", 1631, "artworks/3.jpg", 400.0, 480.0),
        artwork("4", "戴帽的少女", "约翰内斯·维米尔", 1665, "artworks/4.jpg", 280.0, 360.0),
        artwork("5", "微笑的骑士", "弗兰斯·哈尔斯", 1624, "artworks/1.jpg", 480.0, 560.0),
        artwork("6", "拿破仑肖像", "雅克-路易·大卫", 1807, "artworks/2.jpg", 240.0, 320.0),
        artwork("7", "持貂女子", "列奥纳多·达·芬奇", 1489, "artworks/3.jpg", 360.0, 440.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_has_unique_ids() {
        let catalog = Catalog::builtin();
        let ids: HashSet<&str> = catalog.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.projects.len());
    }

    #[test]
    fn test_builtin_catalog_covers_every_category() {
        let catalog = Catalog::builtin();
        for category in ProjectCategory::ALL {
            assert!(
                catalog.projects.iter().any(|p| p.category == category),
                "no project in {category}"
            );
        }
    }

    #[test]
    fn test_artwork_years() {
        assert_eq!(Catalog::builtin().artwork_years(), Some((1489, 1807)));
    }

    #[test]
    fn test_json_catalog_falls_back_to_builtin_artworks() {
        let json = r#"{ "projects": [
            { "id": "x", "title": "X", "category": "插画", "thumbnail": "x.jpg" }
        ] }"#;
        let catalog = Catalog::from_json(json, Path::new("catalog.json")).unwrap();

        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(catalog.artworks.len(), builtin_artworks().len());
    }

    #[test]
    fn test_empty_json_catalog_is_rejected() {
        let err = Catalog::from_json(r#"{ "projects": [] }"#, Path::new("c.json")).unwrap_err();
        assert!(matches!(err, GalleryError::EmptyCatalog(_)));
    }

    #[test]
    fn test_bad_category_is_a_parse_error() {
        let json = r#"{ "projects": [
            { "id": "x", "title": "X", "category": "3D", "thumbnail": "x.jpg" }
        ] }"#;
        let err = Catalog::from_json(json, Path::new("c.json")).unwrap_err();
        assert!(matches!(err, GalleryError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let catalog = Catalog::load_or_builtin(Some(Path::new("/nonexistent/catalog.json")));
        assert_eq!(catalog.projects.len(), builtin_projects().len());
    }
}
