pub const APP_STYLES: &str = r#"
:root {
    --bg: #f3f4f6;
    --surface: #ffffff;
    --border-color: #e5e7eb;
    --text-primary: #1f2937;
    --text-secondary: #6b7280;
    --accent: #2563eb;
    --accent-strong: #4f46e5;
    --success: #16a34a;
    --danger: #dc2626;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    background: var(--bg);
    color: var(--text-primary);
}

.ocean-app { min-height: 100vh; }

.ocean-loading {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 100vh;
    color: var(--text-secondary);
}

/* Buttons */
.btn {
    border: 1px solid var(--border-color);
    background: var(--surface);
    color: var(--text-primary);
    border-radius: 0.5rem;
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
    cursor: pointer;
}

.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: linear-gradient(90deg, var(--accent), var(--accent-strong)); color: #fff; border: none; }
.btn-dark { background: #1f2937; color: #fff; border: none; }
.btn-export { background: var(--success); color: #fff; border: none; }
.btn-wide { width: 100%; }

.link-btn {
    background: none;
    border: none;
    color: var(--text-secondary);
    cursor: pointer;
    padding: 0;
    margin-bottom: 1.5rem;
}

/* Auth */
.auth-screen, .wizard-screen {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}

.auth-card, .wizard-card {
    background: var(--surface);
    width: 100%;
    max-width: 28rem;
    padding: 2rem;
    border-radius: 1rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.auth-brand { color: var(--accent); margin: 0; }
.auth-card input, .refine-bar input {
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    padding: 0.6rem 0.75rem;
    font-size: 0.95rem;
}
.auth-error { color: var(--danger); font-size: 0.85rem; margin: 0; }
.auth-switch { font-size: 0.85rem; color: var(--text-secondary); text-align: center; }
.auth-switch a { color: var(--accent); }

/* Top bar */
.topbar {
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 1.5rem;
    background: var(--surface);
    border-bottom: 1px solid var(--border-color);
    flex-shrink: 0;
}
.topbar-brand { font-weight: 700; color: var(--accent); font-size: 1.25rem; }
.topbar-actions, .topbar-title { display: flex; align-items: center; gap: 1rem; }
.topbar-title h2 { font-size: 1rem; margin: 0; max-width: 28rem; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.topbar-email { color: var(--text-secondary); font-size: 0.875rem; }
.type-badge { font-size: 0.7rem; padding: 0.2rem 0.5rem; border-radius: 0.25rem; background: #dbeafe; color: #1d4ed8; }

/* Dashboard */
.dashboard-body { max-width: 64rem; margin: 0 auto; padding: 2rem 1.5rem; }
.dashboard-heading { display: flex; justify-content: space-between; align-items: center; }
.dashboard-empty { text-align: center; color: var(--text-secondary); padding: 4rem 0; }
.project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; }
.project-card {
    background: var(--surface);
    border: 1px solid var(--border-color);
    border-radius: 0.75rem;
    padding: 1.25rem;
    cursor: pointer;
}
.project-card:hover { border-color: var(--accent); }
.project-card h3 { margin: 0.5rem 0; font-size: 1rem; }
.project-type { font-size: 0.7rem; text-transform: uppercase; color: var(--text-secondary); letter-spacing: 0.05em; }
.project-meta { font-size: 0.75rem; color: var(--text-secondary); margin: 0; }

/* Wizard */
.field-label { font-size: 0.875rem; font-weight: 500; }
.doc-type-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.doc-type-option {
    padding: 1rem;
    border: 2px solid var(--border-color);
    border-radius: 0.75rem;
    background: var(--surface);
    cursor: pointer;
    font-weight: 500;
}
.doc-type-option.selected { border-color: var(--accent); background: #eff6ff; color: #1d4ed8; }
.wizard-topic {
    height: 8rem;
    resize: none;
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    padding: 0.75rem;
    font: inherit;
}

/* Editor */
.editor-screen { height: 100vh; display: flex; flex-direction: column; overflow: hidden; }
.editor-body { flex: 1; display: flex; overflow: hidden; }
.outline-sidebar, .tools-sidebar {
    background: var(--surface);
    display: flex;
    flex-direction: column;
    flex-shrink: 0;
}
.outline-sidebar { width: 16rem; border-right: 1px solid var(--border-color); }
.tools-sidebar { width: 20rem; border-left: 1px solid var(--border-color); }
.sidebar-heading {
    font-size: 0.7rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    color: var(--text-secondary);
    padding: 1rem;
    margin: 0;
    border-bottom: 1px solid var(--border-color);
}
.outline-list { flex: 1; overflow-y: auto; padding: 0.5rem; }
.outline-item {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem;
    border: none;
    border-radius: 0.5rem;
    background: none;
    text-align: left;
    cursor: pointer;
    color: var(--text-secondary);
}
.outline-item.active { background: #eff6ff; color: var(--accent); font-weight: 500; }
.outline-title { overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; flex-shrink: 0; }
.dot-done { background: var(--success); }
.dot-busy { background: #f59e0b; }

.editor-main { flex: 1; display: flex; flex-direction: column; padding: 2rem; overflow-y: auto; }
.page {
    max-width: 56rem;
    width: 100%;
    margin: 0 auto;
    background: var(--surface);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
    min-height: 40rem;
    display: flex;
    flex-direction: column;
}
.page-header { padding: 2.5rem 2.5rem 1rem; border-bottom: 1px solid #f9fafb; }
.page-header h1 { font-family: Georgia, serif; margin: 0 0 0.5rem; }
.page-subtitle { font-size: 0.7rem; letter-spacing: 0.1em; text-transform: uppercase; color: #9ca3af; margin: 0; }
.page-content { flex: 1; padding: 2.5rem; }
.page-generating { text-align: center; color: #9ca3af; padding-top: 6rem; }

.md-body p { margin: 0 0 0.75rem; line-height: 1.7; }
.md-placeholder { color: #9ca3af; font-style: italic; }

.refine-bar {
    max-width: 56rem;
    width: 100%;
    margin: 1.5rem auto 0;
    display: flex;
    gap: 0.5rem;
    background: var(--surface);
    padding: 1rem;
    border-radius: 0.75rem;
    border: 1px solid var(--border-color);
    position: sticky;
    bottom: 1rem;
}
.refine-bar input { flex: 1; }

.feedback-box { padding: 1.5rem; border-bottom: 1px solid var(--border-color); }
.feedback-box p { font-size: 0.875rem; color: var(--text-secondary); margin-top: 0; }
.feedback-buttons { display: flex; gap: 1rem; }
.vote { flex: 1; }
.vote.liked { background: #f0fdf4; border-color: #bbf7d0; color: #15803d; }
.vote.disliked { background: #fef2f2; border-color: #fecaca; color: #b91c1c; }

.comments-box { flex: 1; display: flex; flex-direction: column; padding: 1rem; gap: 0.5rem; overflow: hidden; }
.comments-box h4 { margin: 0; font-size: 0.875rem; }
.comment-list { flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 0.75rem; }
.comment {
    background: #fefce8;
    border: 1px solid #fef9c3;
    border-radius: 0.5rem;
    padding: 0.75rem;
    font-size: 0.875rem;
}
.comments-box textarea {
    height: 5rem;
    resize: none;
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    padding: 0.5rem;
    font: inherit;
    font-size: 0.875rem;
}
"#;
