//! The hardcoded phase-3 migration plan for the appscript code generator.
//!
//! Three edits, applied in order to `EnhancedCodeGenerator.tsx`:
//! expand the lucide-react import and pull in the template storage helper,
//! insert a `handleSaveAsTemplate` handler right after `handleSave`, and
//! swap the single save button for a two-button row. The literals are the
//! exact text of the one migration event this tool exists for; this is not
//! a general rewriting facility.

use lazy_static::lazy_static;
use regex::Regex;

use crate::patch::Edit;

/// Target component path, relative to the web root
pub const DEFAULT_TARGET: &str = "app/tools/appscript/components/EnhancedCodeGenerator.tsx";

const OLD_IMPORT: &str =
    "import { Code, Save, Edit2, Trash2, Plus, ArrowRight, FileCode } from 'lucide-react'";

const NEW_IMPORT: &str = "import { Code, Save, Edit2, Trash2, Plus, ArrowRight, FileCode, BookmarkPlus } from 'lucide-react'\nimport { createTemplate } from '@/lib/template-storage'";

// Matches `const handleSave = ...` from its signature through the closing
// brace of its last inner block and then the function's own closing brace.
// Text-level anchoring is fragile on repeated structures; the guard below
// keeps a re-run from inserting the handler twice.
const HANDLE_SAVE_ANCHOR: &str = r"(?s)const handleSave = \(\) => \{[^}]+\}\n  \}";

const HANDLER_GUARD: &str = "const handleSaveAsTemplate";

const SAVE_AS_TEMPLATE_HANDLER: &str = r#"
  const handleSaveAsTemplate = () => {
    if (!generatedCode) {
      alert('저장할 코드가 없습니다.')
      return
    }

    const templateName = prompt('템플릿 이름을 입력하세요:', menuName || '새 템플릿')
    if (!templateName) return

    const templateDescription = prompt(
      '템플릿 설명을 입력하세요:',
      feature || description
    )

    try {
      const categoryInput = prompt(
        '카테고리를 입력하세요 (기본값: 사용자 생성):',
        '사용자 생성'
      )

      const tagsInput = prompt(
        '태그를 쉼표로 구분하여 입력하세요:',
        '자동생성, 사용자'
      )
      const tags = tagsInput ? tagsInput.split(',').map(t => t.trim()) : []

      createTemplate(
        templateName,
        templateDescription || '자동 생성된 템플릿',
        generatedCode,
        {
          category: categoryInput || '사용자 생성',
          tags
        }
      )

      alert('템플릿으로 저장되었습니다!')
    } catch (error) {
      console.error('템플릿 저장 실패:', error)
      alert('템플릿 저장에 실패했습니다.')
    }
  }
"#;

const OLD_BUTTON_SECTION: &str = r#"              <div className="flex items-center justify-between mb-2">
                <h4 className="text-sm font-semibold text-gray-700">생성된 코드</h4>
                <button
                  onClick={handleSave}
                  className="flex items-center gap-1 px-3 py-1 bg-green-600 text-white text-sm rounded hover:bg-green-700 transition-colors"
                >
                  <Save className="h-4 w-4" />
                  저장
                </button>
              </div>"#;

const NEW_BUTTON_SECTION: &str = r#"              <div className="flex items-center justify-between mb-2">
                <h4 className="text-sm font-semibold text-gray-700">생성된 코드</h4>
                <div className="flex gap-2">
                  <button
                    onClick={handleSaveAsTemplate}
                    className="flex items-center gap-1 px-3 py-1 bg-purple-600 text-white text-sm rounded hover:bg-purple-700 transition-colors"
                  >
                    <BookmarkPlus className="h-4 w-4" />
                    템플릿으로 저장
                  </button>
                  <button
                    onClick={handleSave}
                    className="flex items-center gap-1 px-3 py-1 bg-green-600 text-white text-sm rounded hover:bg-green-700 transition-colors"
                  >
                    <Save className="h-4 w-4" />
                    저장
                  </button>
                </div>
              </div>"#;

lazy_static! {
    static ref HANDLE_SAVE_RE: Regex = Regex::new(HANDLE_SAVE_ANCHOR).unwrap();
}

/// Build the ordered edit list for the phase-3 migration
pub fn plan() -> Vec<Edit> {
    vec![
        Edit::replace(
            "expand lucide-react import and add template storage import",
            OLD_IMPORT,
            NEW_IMPORT,
        ),
        Edit::insert_after(
            "insert handleSaveAsTemplate after handleSave",
            HANDLE_SAVE_RE.clone(),
            SAVE_AS_TEMPLATE_HANDLER,
            Some(HANDLER_GUARD.to_string()),
        ),
        Edit::replace(
            "replace save button with the two-button row",
            OLD_BUTTON_SECTION,
            NEW_BUTTON_SECTION,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{EditOutcome, PatchApplier};
    use crate::utils::fs;
    use tempfile::tempdir;

    /// A trimmed-down component with the same shape as the real target file.
    fn sample_component() -> String {
        format!(
            "{}\n\nexport default function EnhancedCodeGenerator() {{\n  \
             const handleSave = () => {{\n    \
             if (!generatedCode) {{\n      \
             alert('저장할 코드가 없습니다.')\n      \
             return\n    \
             }}\n  \
             }}\n\n  \
             return (\n    <div>\n{}\n    </div>\n  )\n}}\n",
            OLD_IMPORT, OLD_BUTTON_SECTION
        )
    }

    #[test]
    fn test_full_migration_applies_all_edits() {
        let (patched, report) = PatchApplier::new(plan()).run(&sample_component());

        assert!(report.is_clean());
        assert!(report.changed());

        assert!(!patched.contains(OLD_IMPORT));
        assert_eq!(patched.matches(NEW_IMPORT).count(), 1);
        assert!(!patched.contains(OLD_BUTTON_SECTION));
        assert!(patched.contains(NEW_BUTTON_SECTION));

        // The handler lands immediately after handleSave's closing brace.
        assert!(patched.contains("  }\n\n  const handleSaveAsTemplate = () => {"));
    }

    #[test]
    fn test_rerun_is_inert() {
        let applier = PatchApplier::new(plan());
        let (patched, _) = applier.run(&sample_component());
        let (repatched, report) = applier.run(&patched);

        assert_eq!(repatched, patched);
        assert!(!report.changed());
        assert!(report.is_clean());
        for entry in report.entries() {
            assert_eq!(entry.outcome, EditOutcome::AlreadyApplied);
        }
    }

    #[test]
    fn test_minimal_file_replaces_both_literals_verbatim() {
        // Only the import line and the button block are present; the insert
        // anchor is absent and must be reported as a miss, not an error.
        let input = format!("{}\n{}\n", OLD_IMPORT, OLD_BUTTON_SECTION);
        let (patched, report) = PatchApplier::new(plan()).run(&input);

        assert_eq!(patched, format!("{}\n{}\n", NEW_IMPORT, NEW_BUTTON_SECTION));
        assert!(!report.is_clean());
        assert_eq!(
            report.missed(),
            vec!["insert handleSaveAsTemplate after handleSave"]
        );
    }

    #[test]
    fn test_end_to_end_on_disk() {
        let dir = tempdir().unwrap();
        let target = dir.path().join(DEFAULT_TARGET);
        fs::write_file_sync(&target, &sample_component()).unwrap();

        let content = fs::read_file_to_string(&target).unwrap();
        let (patched, report) = PatchApplier::new(plan()).run(&content);
        assert!(report.is_clean());
        fs::write_file_sync(&target, &patched).unwrap();

        let written = fs::read_file_to_string(&target).unwrap();
        assert!(written.contains("const handleSaveAsTemplate"));
        assert!(written.contains(NEW_BUTTON_SECTION));
    }
}
