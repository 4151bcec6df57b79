//! HTML pages for the browser flow: upload form, polling page, results table.

use std::time::Duration;

use ammonia::clean_text;

use textra_core::{ALLOWED_EXTENSIONS, ExtractedLine, JobId};

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;}\
table{border-collapse:collapse;width:100%;}\
th,td{border:1px solid #ccc;padding:.4rem;text-align:left;}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = clean_text(title),
    )
}

pub fn index_page() -> String {
    let accept = ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");
    layout(
        "Textra",
        &format!(
            "<h1>Extract text from a document</h1>\n\
             <form action=\"/upload\" method=\"post\" enctype=\"multipart/form-data\">\n\
             <input type=\"file\" name=\"document\" accept=\"{accept}\">\n\
             <button type=\"submit\">Upload</button>\n\
             </form>"
        ),
    )
}

/// Page that polls `/status` from the browser and posts to `/result` once the job is done.
pub fn check_status_page(job_id: &JobId, poll_interval: Duration) -> String {
    let job_id = clean_text(job_id.as_str());
    let interval_ms = poll_interval.as_millis();
    layout(
        "Processing",
        &format!(
            "<h1>Processing document</h1>\n\
             <p>Job <code>{job_id}</code>: <span id=\"status\">IN_PROGRESS</span></p>\n\
             <form id=\"result-form\" action=\"/result\" method=\"post\">\n\
             <input type=\"hidden\" id=\"job-id\" name=\"jobId\" value=\"{job_id}\">\n\
             </form>\n\
             <script>\n\
             const form = document.getElementById('result-form');\n\
             const jobId = document.getElementById('job-id').value;\n\
             async function poll() {{\n\
               const res = await fetch('/status', {{\n\
                 method: 'POST',\n\
                 body: new URLSearchParams({{ jobId }}),\n\
               }});\n\
               const body = await res.json();\n\
               if (!res.ok) {{\n\
                 document.getElementById('status').textContent = body.error;\n\
                 return;\n\
               }}\n\
               document.getElementById('status').textContent = body.status;\n\
               if (body.status === 'IN_PROGRESS') {{\n\
                 setTimeout(poll, {interval_ms});\n\
               }} else {{\n\
                 form.submit();\n\
               }}\n\
             }}\n\
             setTimeout(poll, {interval_ms});\n\
             </script>"
        ),
    )
}

pub fn results_page(lines: &[ExtractedLine]) -> String {
    let rows: String = lines
        .iter()
        .map(|line| {
            format!(
                "<tr><td>{}</td><td>{:.2}</td></tr>\n",
                clean_text(&line.text),
                line.confidence
            )
        })
        .collect();
    layout(
        "Results",
        &format!(
            "<h1>Extracted text</h1>\n\
             <p>{count} line(s)</p>\n\
             <table>\n<tr><th>Text</th><th>Confidence</th></tr>\n{rows}</table>\n\
             <p><a href=\"/\">Upload another document</a></p>",
            count = lines.len(),
        ),
    )
}
