//!
//! Owner dashboard rendered for `/ticket?<token>`
//!

use crate::repository::{Ticket, TicketStatus};
use time::{format_description::well_known::Rfc2822, OffsetDateTime};

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    escaped
}

fn format_datetime(datetime: OffsetDateTime) -> String {
    datetime
        .format(&Rfc2822)
        .unwrap_or_else(|_| datetime.to_string())
}

fn render_messages(ticket: &Ticket) -> String {
    if ticket.messages.is_empty() {
        return r#"<p class="muted">No messages sent yet.</p>"#.to_string();
    }

    ticket
        .messages
        .iter()
        .map(|message| {
            format!(
                r#"<div class="message"><div class="meta">{sender} &bull; {sent_at}</div><div>{text}</div></div>"#,
                sender = message.sender.as_ref(),
                sent_at = format_datetime(message.sent_at),
                text = escape(&message.text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_actions(ticket: &Ticket) -> String {
    match ticket.status {
        TicketStatus::Complete => format!(
            r#"<div class="card done">This ticket was completed on {}.</div>"#,
            ticket
                .completed_at
                .map(format_datetime)
                .unwrap_or_default()
        ),
        TicketStatus::Open => r#"<div class="card">
      <textarea id="messageInput" rows="4" placeholder="Write a message to the player..."></textarea>
      <button onclick="sendMessage()">Send Message</button>
      <button class="complete" onclick="completeTicket()">Mark as Complete</button>
    </div>"#
            .to_string(),
    }
}

pub fn render(ticket: &Ticket) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Ticket {username} - Evans Mining Service</title>
  <style>
    body {{ font-family: 'Segoe UI', sans-serif; background: #0a0e1a; color: #e0e8ff; margin: 0; }}
    main {{ max-width: 720px; margin: 40px auto; padding: 0 16px; }}
    .card {{ background: #0d1526; border: 1px solid #1e3a6e; border-radius: 12px; padding: 20px; margin: 16px 0; }}
    .done {{ border-color: #2e8b57; }}
    .label {{ color: #6b9bd2; font-size: 12px; text-transform: uppercase; }}
    .muted, .meta {{ color: #4a6a9e; font-size: 12px; }}
    .message {{ border-left: 3px solid #4a7aee; padding: 8px 12px; margin: 8px 0; white-space: pre-wrap; }}
    textarea {{ width: 100%; box-sizing: border-box; background: #0a1224; color: #c8d8f0; border: 1px solid #1e3a6e; border-radius: 8px; padding: 12px; }}
    button {{ margin-top: 12px; padding: 10px 20px; border: 0; border-radius: 8px; background: #1a4a9e; color: #fff; cursor: pointer; }}
    button.complete {{ background: #2e8b57; }}
  </style>
</head>
<body>
  <main>
    <h1>Mining Ticket</h1>
    <div class="card">
      <div class="label">Username</div><p>{username}</p>
      <div class="label">Platform</div><p>{platform}</p>
      <div class="label">Area Size</div><p>{area_size}</p>
      <div class="label">Email</div><p>{email}</p>
      <div class="label">Status</div><p>{status}</p>
      <div class="label">Submitted</div><p>{created_at}</p>
    </div>
    <h2>Messages</h2>
    <div class="card">
{messages}
    </div>
    {actions}
  </main>
  <script>
    const ticketId = '{id}';
    async function post(path, body) {{
      const res = await fetch(window.location.origin + '/api/ticket/' + ticketId + path, {{
        method: 'POST',
        headers: {{ 'Content-Type': 'application/json' }},
        body: JSON.stringify(body || {{}})
      }});
      const data = await res.json();
      if (!data.success) {{ alert('Failed: ' + (data.error || 'Unknown error')); return false; }}
      return true;
    }}
    async function sendMessage() {{
      const message = document.getElementById('messageInput').value.trim();
      if (!message) return alert('Please type a message first.');
      if (await post('/message', {{ message }})) location.reload();
    }}
    async function completeTicket() {{
      if (!confirm('Mark this ticket as complete?')) return;
      if (await post('/complete')) location.reload();
    }}
  </script>
</body>
</html>"#,
        id = ticket.id,
        username = escape(&ticket.username),
        platform = ticket.platform.edition(),
        area_size = escape(&ticket.area_size),
        email = escape(&ticket.email),
        status = ticket.status.as_ref(),
        created_at = format_datetime(ticket.created_at),
        messages = render_messages(ticket),
        actions = render_actions(ticket),
    )
}
