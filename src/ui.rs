pub fn render_index(link_count: usize, click_count: u64) -> String {
    INDEX_HTML
        .replace("{{LINKS}}", &link_count.to_string())
        .replace("{{CLICKS}}", &click_count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Shortlink</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #c9ddf2;
      --ink: #22303c;
      --accent: #2568ef;
      --accent-2: #173a5e;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(23, 58, 94, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4eefb 60%, #f2f6fb 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      font-weight: 600;
    }

    .subtitle {
      margin: 0;
      color: #5d6b78;
      font-size: 1rem;
    }

    .totals {
      display: flex;
      gap: 18px;
      font-size: 0.9rem;
      color: #5d6b78;
    }

    .totals strong {
      color: var(--accent-2);
    }

    .entry {
      display: grid;
      gap: 12px;
    }

    input[type="url"] {
      width: 100%;
      border: 1px solid rgba(23, 58, 94, 0.25);
      border-radius: 12px;
      padding: 14px 16px;
      font-size: 1rem;
      font-family: inherit;
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-shorten {
      background: var(--accent);
    }

    .btn-qr {
      background: var(--accent-2);
    }

    .result {
      background: white;
      border: 1px solid rgba(23, 58, 94, 0.1);
      border-radius: 14px;
      padding: 16px;
      word-break: break-all;
    }

    .result.error {
      border-color: #c63b2b;
      color: #c63b2b;
    }

    .result img {
      margin-top: 8px;
      max-width: 240px;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Shortlink</h1>
      <p class="subtitle">Paste a long URL, get a short one or a QR code.</p>
    </header>

    <div class="totals">
      <span><strong>{{LINKS}}</strong> links created</span>
      <span><strong>{{CLICKS}}</strong> clicks served</span>
    </div>

    <section class="entry">
      <input id="urlInput" type="url" placeholder="https://example.com/very/long/path" />
      <div class="actions">
        <button class="btn-shorten" id="shorten-btn" type="button">Shorten</button>
        <button class="btn-qr" id="qr-btn" type="button">QR code</button>
      </div>
    </section>

    <div id="result"></div>
    <div id="qrResult"></div>
  </main>

  <script>
    const urlInput = document.getElementById('urlInput');
    const shortResult = document.getElementById('result');
    const qrResult = document.getElementById('qrResult');

    const postJson = async (endpoint, url) => {
      const res = await fetch(endpoint, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ url })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const renderError = (container, message) => {
      container.replaceChildren();
      const box = document.createElement('div');
      box.className = 'result error';
      box.textContent = message;
      container.appendChild(box);
    };

    const renderShortLink = (container, shortUrl) => {
      container.replaceChildren();
      const box = document.createElement('div');
      box.className = 'result';
      const label = document.createElement('strong');
      label.textContent = 'Short URL:';
      const anchor = document.createElement('a');
      anchor.href = shortUrl;
      anchor.textContent = shortUrl;
      box.append(label, document.createElement('br'), anchor);
      container.appendChild(box);
    };

    const renderQr = (container, qrFile) => {
      container.replaceChildren();
      const box = document.createElement('div');
      box.className = 'result';
      const label = document.createElement('strong');
      label.textContent = 'QR Code:';
      const img = document.createElement('img');
      img.src = '/static/' + qrFile;
      img.alt = 'QR Code';
      box.append(label, document.createElement('br'), img);
      container.appendChild(box);
    };

    const shortenUrl = async () => {
      const url = urlInput.value.trim();
      if (!url) return;
      try {
        const data = await postJson('/api/shorten', url);
        if (typeof data.short_url !== 'string') {
          throw new Error('Malformed response');
        }
        renderShortLink(shortResult, data.short_url);
      } catch (err) {
        renderError(shortResult, err.message);
      }
    };

    const generateQr = async () => {
      const url = urlInput.value.trim();
      if (!url) return;
      try {
        const data = await postJson('/api/qr', url);
        if (typeof data.qr_file !== 'string') {
          throw new Error('Malformed response');
        }
        renderQr(qrResult, data.qr_file);
      } catch (err) {
        renderError(qrResult, err.message);
      }
    };

    document.getElementById('shorten-btn').addEventListener('click', shortenUrl);
    document.getElementById('qr-btn').addEventListener('click', generateQr);
    urlInput.addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        shortenUrl();
      }
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_totals() {
        let page = render_index(12, 345);
        assert!(page.contains("<strong>12</strong> links created"));
        assert!(page.contains("<strong>345</strong> clicks served"));
        assert!(!page.contains("{{LINKS}}"));
        assert!(!page.contains("{{CLICKS}}"));
    }

    #[test]
    fn page_wires_both_flows() {
        let page = render_index(0, 0);
        assert!(page.contains("id=\"urlInput\""));
        assert!(page.contains("/api/shorten"));
        assert!(page.contains("/api/qr"));
        assert!(page.contains("'/static/' + qrFile"));
    }
}
