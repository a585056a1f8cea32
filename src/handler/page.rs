//! Gallery page
//!
//! Each view of `/` counts as a visit. The page shows the counters, loads
//! the image grid from `/api/images` in the browser, and posts new images
//! to `/upload`.

use super::router::RequestContext;
use crate::config::AppState;
use crate::http::{self, HttpResponse};
use crate::logger;

/// `GET /`
pub fn serve_index(ctx: &RequestContext<'_>, state: &AppState) -> HttpResponse {
    match state.visitors.record_visit(&ctx.client_addr) {
        Ok(stats) => http::build_html_response(
            render_index(stats.total_visits, stats.unique_visitors),
            ctx.is_head,
        ),
        Err(e) => {
            logger::log_error(&format!("Failed to record visit: {e}"));
            http::build_500_response()
        }
    }
}

/// Fill the counters into the page template
pub fn render_index(total_visits: u64, unique_visitors: u64) -> String {
    INDEX_TEMPLATE
        .replace("{{total_visits}}", &total_visits.to_string())
        .replace("{{unique_visitors}}", &unique_visitors.to_string())
}

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Image Gallery</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
            background: #f4f5f7;
            color: #222;
            padding: 24px;
        }
        header {
            display: flex;
            justify-content: space-between;
            align-items: baseline;
            flex-wrap: wrap;
            gap: 12px;
            margin-bottom: 24px;
        }
        h1 { font-size: 1.8em; }
        .stats span { margin-left: 16px; color: #555; }
        .stats strong { color: #222; }
        #status { color: #777; margin-bottom: 16px; }
        #upload-form { margin-bottom: 16px; }
        #upload-result { margin-left: 12px; color: #555; }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
            gap: 16px;
        }
        .card {
            background: white;
            border-radius: 8px;
            overflow: hidden;
            box-shadow: 0 1px 4px rgba(0, 0, 0, 0.12);
        }
        .card a { display: block; }
        .card img {
            width: 100%;
            height: 180px;
            object-fit: cover;
            display: block;
            background: #ddd;
        }
        .meta { padding: 8px 12px; font-size: 0.9em; }
        .meta .name { word-break: break-all; }
        .meta .size { color: #888; }
    </style>
</head>
<body>
    <header>
        <h1>Image Gallery</h1>
        <div class="stats">
            <span>Total visits: <strong id="total-visits">{{total_visits}}</strong></span>
            <span>Unique visitors: <strong id="unique-visitors">{{unique_visitors}}</strong></span>
        </div>
    </header>
    <form id="upload-form">
        <input type="file" name="images" accept="image/*" multiple>
        <button type="submit">Upload</button>
        <span id="upload-result"></span>
    </form>
    <p id="status">Loading images...</p>
    <div class="grid" id="grid"></div>
    <script>
        function loadImages() {
            var status = document.getElementById('status');
            var grid = document.getElementById('grid');
            fetch('/api/images')
                .then(function (res) { return res.json(); })
                .then(function (data) {
                    grid.innerHTML = '';
                    if (!data.success) {
                        status.textContent = 'Could not load images.';
                        return;
                    }
                    status.textContent = data.count === 0
                        ? 'No images yet. Upload some or put files in the image directory.'
                        : data.count + ' image(s)';
                    data.images.forEach(function (img) {
                        var url = '/images/' + encodeURIComponent(img.path);
                        var card = document.createElement('div');
                        card.className = 'card';

                        var link = document.createElement('a');
                        link.href = url;
                        link.target = '_blank';
                        var pic = document.createElement('img');
                        pic.src = url;
                        pic.alt = img.name;
                        pic.loading = 'lazy';
                        link.appendChild(pic);

                        var meta = document.createElement('div');
                        meta.className = 'meta';
                        var name = document.createElement('div');
                        name.className = 'name';
                        name.textContent = img.name;
                        var size = document.createElement('div');
                        size.className = 'size';
                        size.textContent = img.size;
                        meta.appendChild(name);
                        meta.appendChild(size);

                        card.appendChild(link);
                        card.appendChild(meta);
                        grid.appendChild(card);
                    });
                })
                .catch(function () {
                    status.textContent = 'Could not load images.';
                });
        }

        document.getElementById('upload-form').addEventListener('submit', function (event) {
            event.preventDefault();
            var form = event.target;
            var result = document.getElementById('upload-result');
            result.textContent = 'Uploading...';
            fetch('/upload', { method: 'POST', body: new FormData(form) })
                .then(function (res) { return res.json(); })
                .then(function (data) {
                    result.textContent = data.success
                        ? data.uploadedCount + ' file(s) uploaded'
                        : data.message;
                    if (data.success) {
                        form.reset();
                        loadImages();
                    }
                })
                .catch(function () {
                    result.textContent = 'Upload failed.';
                });
        });

        loadImages();
    </script>
</body>
</html>
"#;
