use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-start: #eff6ff;
    --color-bg-end: #faf5ff;
    --color-surface: #ffffff;
    --color-text-primary: #111827;
    --color-text-secondary: #4b5563;
    --color-text-muted: #9ca3af;
    --color-border: #e5e7eb;
    --color-accent: #2563eb;
    --color-accent-soft: #dbeafe;
    --color-danger: #dc2626;
    --color-danger-soft: #fee2e2;
    --color-success: #16a34a;
    --color-success-soft: #dcfce7;
    --color-banner-bg: #fee2e2;
    --color-banner-border: #f87171;
    --color-banner-text: #991b1b;
    --color-card-shadow: rgba(17, 24, 39, 0.08);
}
body { background: linear-gradient(135deg, var(--color-bg-start), var(--color-bg-end)); color: var(--color-text-primary); }
.header { background: var(--color-surface); box-shadow: 0 1px 3px var(--color-card-shadow); }
.content-card { background: var(--color-surface); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-start: #0b1120;
    --color-bg-end: #1e1b2e;
    --color-surface: #111827;
    --color-text-primary: #f9fafb;
    --color-text-secondary: #d1d5db;
    --color-text-muted: #6b7280;
    --color-border: #374151;
    --color-accent: #60a5fa;
    --color-accent-soft: #1e3a5f;
    --color-danger: #f87171;
    --color-danger-soft: #450a0a;
    --color-success: #4ade80;
    --color-success-soft: #052e16;
    --color-banner-bg: #450a0a;
    --color-banner-border: #b91c1c;
    --color-banner-text: #fecaca;
    --color-card-shadow: rgba(0, 0, 0, 0.4);
}
body { background: linear-gradient(135deg, var(--color-bg-start), var(--color-bg-end)); color: var(--color-text-primary); }
.header { background: var(--color-surface); box-shadow: 0 1px 3px var(--color-card-shadow); }
.content-card { background: var(--color-surface); }
"#;
