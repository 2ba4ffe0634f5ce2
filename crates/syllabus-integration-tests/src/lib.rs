//! Fixture trees for end-to-end tests.
//!
//! A [`Fixture`] is a temp directory shaped like a real catalog root
//! (`concepts/NN-slug/README.md` and friends) that disappears on drop.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use syllabus_loader::{load_dir, Loaded, LoaderOptions};
use tempfile::TempDir;

/// A README with a title, the `> **Key**: Value` header line and a body.
pub fn readme(title: &str, category: &str, priority: &str, status: &str, body: &str) -> String {
    format!(
        "# {}\n\n> **Category**: {} | **Priority**: {} | **Difficulty**: Intermediate | **Status**: {}\n\n{}\n",
        title, category, priority, status, body
    )
}

pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        fs::create_dir_all(dir.path().join("concepts"))?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn concepts(&self) -> PathBuf {
        self.root().join("concepts")
    }

    /// Write any file under `concepts/`, creating parent folders.
    pub fn file(&self, relative: &str, contents: &str) -> io::Result<&Self> {
        let path = self.concepts().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(self)
    }

    /// A topic folder with a README built by [`readme`].
    pub fn topic(&self, folder: &str, title: &str, category: &str, priority: &str) -> io::Result<&Self> {
        self.file(
            &format!("{}/README.md", folder),
            &readme(title, category, priority, "Not Started", &format!("All about {}.", title.to_lowercase())),
        )
    }

    pub fn guide(&self, folder: &str, slug: &str, body: &str) -> io::Result<&Self> {
        self.file(&format!("{}/{}.md", folder, slug), body)
    }

    pub fn example(&self, folder: &str, file: &str, body: &str) -> io::Result<&Self> {
        self.file(&format!("{}/examples/{}", folder, file), body)
    }

    pub fn remove(&self, relative: &str) -> io::Result<()> {
        let path = self.concepts().join(relative);
        if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }

    pub fn load(&self) -> syllabus_loader::Result<Loaded> {
        load_dir(self.root(), &LoaderOptions::default())
    }
}

/// Routing, rendering and middleware, numbered 01, 02 and 13, cross-linked,
/// with a guide and two examples.
pub fn sample() -> io::Result<Fixture> {
    let fixture = Fixture::new()?;
    fixture
        .file(
            "01-routing/README.md",
            &readme(
                "Routing",
                "Core",
                "🔴 High",
                "✅ Done",
                "File-system based routing.\n\n\
                 See [Dynamic Routes](./dynamic-routes.md) and [Rendering](../02-rendering/README.md).\n\n\
                 ---\n\nNext: [Rendering](../02-rendering/README.md) →",
            ),
        )?
        .guide(
            "01-routing",
            "dynamic-routes",
            "# Dynamic Routes\n\nSegments in brackets. Pairs well with [Middleware](../13-middleware/README.md).\n",
        )?
        .example("01-routing", "README.md", "# Examples\n\n- [page.md](./page.md) - Basic page component\n")?
        .example("01-routing", "page.md", "```tsx\nexport default function Page() {\n  return <h1>Hello</h1>\n}\n```\n")?
        .example("01-routing", "layout.md", "Root layout\n\n```tsx\nexport default function Layout() {}\n```\n")?
        .file(
            "02-rendering/README.md",
            &readme(
                "Rendering",
                "Core",
                "High",
                "In Progress",
                "Server and client components.\n\n\
                 ← Previous: [Routing](../01-routing/README.md) | Next: [Middleware](../13-middleware/README.md) →",
            ),
        )?
        .file(
            "13-middleware/README.md",
            &readme(
                "Middleware",
                "Intermediate",
                "Medium",
                "Not Started",
                "## Overview\n\nRuns before a request completes. Related: [Routing](../01-routing/).",
            ),
        )?;
    Ok(fixture)
}
