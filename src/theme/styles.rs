//! Global CSS styles for the review card window.
//!
//! Dark editor chrome; the card itself is an SVG and carries its own colors.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface-page: #111827;
  --surface-panel: #1f2937;
  --surface-input: #374151;
  --border: #4b5563;

  /* Accents */
  --accent-blue: #2563eb;
  --accent-blue-hover: #1d4ed8;
  --accent-green: #16a34a;
  --accent-green-hover: #15803d;
  --accent-pink: #ec4899;
  --status-ok: #4ade80;

  /* Text */
  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;

  --radius: 0.75rem;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
  background: var(--surface-page);
  color: var(--text-primary);
  min-height: 100vh;
}

/* === Layout === */
.composer {
  display: flex;
  gap: 2rem;
  padding: 2rem;
  min-height: 100vh;
}

@media (max-width: 900px) {
  .composer { flex-direction: column; }
}

/* === Editor === */
.editor {
  flex: 0 0 340px;
  height: fit-content;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 1.5rem;
  background: var(--surface-panel);
  border-radius: var(--radius);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
}

.editor__title {
  font-size: 1.5rem;
  font-weight: 700;
}

.field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.field__label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.field__input {
  width: 100%;
  padding: 0.5rem 1rem;
  background: var(--surface-input);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  color: var(--text-primary);
  font-size: 1rem;
}

.field__input:focus {
  outline: none;
  box-shadow: 0 0 0 2px #3b82f6;
}

.field__hint {
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Star Rating === */
.star-rating {
  display: flex;
  gap: 0.5rem;
}

.star-button {
  display: flex;
  padding: 0.25rem;
  background: none;
  border: none;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.star-button:hover { transform: scale(1.1); }
.star-button:focus { outline: none; }

/* === Image Upload === */
.image-upload {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.image-upload-btn {
  padding: 0.5rem 1rem;
  background: var(--accent-blue);
  border: none;
  border-radius: 0.5rem;
  color: var(--text-primary);
  font-size: 1rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.image-upload-btn:hover { background: var(--accent-blue-hover); }
.image-upload-btn:disabled { opacity: 0.6; cursor: wait; }

.image-upload__status {
  font-size: 0.875rem;
  color: var(--status-ok);
}

/* === Download === */
.download-btn {
  margin-top: 2rem;
  padding: 0.75rem 1rem;
  background: var(--accent-green);
  border: none;
  border-radius: 0.5rem;
  color: var(--text-primary);
  font-weight: 700;
  font-size: 1rem;
  cursor: pointer;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
  transition: background var(--transition-fast);
}

.download-btn:hover { background: var(--accent-green-hover); }
.download-btn:disabled { opacity: 0.6; cursor: wait; }

/* === Preview === */
.preview-pane {
  position: relative;
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  background: rgba(0, 0, 0, 0.5);
  border: 1px solid var(--surface-input);
  border-radius: var(--radius);
  overflow: hidden;
}

.preview-pane__label {
  position: absolute;
  top: 1rem;
  left: 1rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.card-frame {
  width: 405px;
  height: 720px;
  flex-shrink: 0;
  background: #000;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.6);
}

.card-frame svg {
  display: block;
}
"#;
