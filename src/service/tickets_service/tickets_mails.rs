//!
//! HTML mails sent during ticket lifecycle.
//! User supplied values are embedded as they are.
//!

use crate::{repository::Ticket, service::mail_service::Mail};
use time::{format_description::well_known::Rfc2822, OffsetDateTime};

const SERVICE_NAME: &str = "Evans Mining Service";

///
/// Short form of the ticket id quoted in every mail footer
///
fn short_ticket_id(ticket: &Ticket) -> String {
    let mut id = ticket.id.simple().to_string();
    id.truncate(8);

    id.to_uppercase()
}

fn layout(heading: &str, ticket: &Ticket, content: &str) -> String {
    let short_id = short_ticket_id(ticket);

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: 'Segoe UI', sans-serif; background: #0a0e1a; color: #e0e8ff; margin: 0; padding: 0;">
  <div style="max-width: 600px; margin: 40px auto; background: #0d1526; border: 1px solid #1e3a6e; border-radius: 16px; overflow: hidden;">
    <div style="background: #0d2b6e; padding: 32px; text-align: center;">
      <h1 style="margin: 0; font-size: 26px; color: #7eb3ff; letter-spacing: 2px;">{heading}</h1>
      <p style="margin: 8px 0 0; color: #a0c0ff; font-size: 14px;">Donut SMP &bull; Official Ticket System</p>
    </div>
    <div style="padding: 32px;">
{content}
    </div>
    <div style="background: #070d1a; padding: 20px 32px; text-align: center; color: #4a6a9e; font-size: 12px;">
      {SERVICE_NAME} &bull; Donut SMP &bull; Ticket ID: {short_id}
    </div>
  </div>
</body>
</html>"#
    )
}

fn field(label: &str, value: &str) -> String {
    format!(
        r#"      <p style="margin: 0 0 12px;"><span style="color: #6b9bd2; font-size: 12px; text-transform: uppercase;">{label}</span><br><strong>{value}</strong></p>"#
    )
}

fn format_datetime(datetime: OffsetDateTime) -> String {
    datetime
        .format(&Rfc2822)
        .unwrap_or_else(|_| datetime.to_string())
}

fn ticket_fields(ticket: &Ticket) -> String {
    [
        field("Username", &ticket.username),
        field("Platform", ticket.platform.edition()),
        field("Area Size", &ticket.area_size),
        field("Submitted", &format_datetime(ticket.created_at)),
    ]
    .join("\n")
}

pub fn submission_confirmation(ticket: &Ticket) -> Mail {
    let content = format!(
        r#"      <p>Hey <strong>{username}</strong>,</p>
      <p>Your mining ticket has been successfully submitted! Evan will review your request and get back to you soon.</p>
{fields}"#,
        username = ticket.username,
        fields = ticket_fields(ticket),
    );

    Mail {
        sender_name: SERVICE_NAME,
        to: ticket.email.clone(),
        subject: format!("Your Mining Ticket Has Been Received - {SERVICE_NAME}"),
        html: layout("EVANS MINING SERVICE", ticket, &content),
    }
}

pub fn new_ticket_alert(ticket: &Ticket, owner_link: &str, operator_email: &str) -> Mail {
    let content = format!(
        r#"      <p>A new mining ticket has been submitted.</p>
{fields}
{email}
      <p style="text-align: center; margin: 28px 0;">
        <a href="{owner_link}" style="background: #1a4a9e; color: #ffffff; padding: 12px 28px; border-radius: 8px; text-decoration: none; font-weight: 600;">Open Ticket Dashboard</a>
      </p>
      <p style="color: #4a6a9e; font-size: 12px;">{owner_link}</p>"#,
        fields = ticket_fields(ticket),
        email = field("Email", &ticket.email),
    );

    Mail {
        sender_name: "Evans Mining Tickets",
        to: operator_email.to_string(),
        subject: format!("New Mining Ticket from {}", ticket.username),
        html: layout("NEW MINING TICKET", ticket, &content),
    }
}

pub fn operator_message(ticket: &Ticket, text: &str) -> Mail {
    let content = format!(
        r#"      <p>Hey <strong>{username}</strong>,</p>
      <p>Evan sent you a message about your mining ticket ({area_size}):</p>
      <div style="background: #0a1830; border-left: 4px solid #4a7aee; border-radius: 8px; padding: 16px 20px; margin: 20px 0; white-space: pre-wrap;">{text}</div>
      <p style="color: #8090b0;">Reply in game or on Discord if you have any questions.</p>"#,
        username = ticket.username,
        area_size = ticket.area_size,
    );

    Mail {
        sender_name: "Evan - Evans Mining",
        to: ticket.email.clone(),
        subject: format!("Evan Sent You a Message - {SERVICE_NAME}"),
        html: layout("NEW MESSAGE", ticket, &content),
    }
}

pub fn review_request(ticket: &Ticket) -> Mail {
    let content = format!(
        r#"      <p>Hey <strong>{username}</strong>,</p>
      <p>Your <strong>{area_size}</strong> area has been fully mined out. Thanks for choosing {SERVICE_NAME}!</p>
      <p>Head to the {SERVICE_NAME} website and click "Leave a Review" to share your experience. It helps other players and supports Evan's work on Donut SMP!</p>"#,
        username = ticket.username,
        area_size = ticket.area_size,
    );

    Mail {
        sender_name: "Evan - Evans Mining",
        to: ticket.email.clone(),
        subject: "Your Mining Plot is Complete! Leave a Review - Evans Mining".to_string(),
        html: layout("PLOT COMPLETE", ticket, &content),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{Platform, TicketStatus};
    use uuid::Uuid;

    fn ticket() -> Ticket {
        Ticket {
            id: Uuid::new_v4(),
            username: ".Foo".to_string(),
            platform: Platform::Bedrock,
            area_size: "32x32".to_string(),
            email: "a@b.com".to_string(),
            status: TicketStatus::Open,
            created_at: OffsetDateTime::now_utc(),
            completed_at: None,
            messages: Vec::new(),
        }
    }

    #[test]
    fn submission_confirmation_sent_to_player() {
        let mail = submission_confirmation(&ticket());

        assert_eq!(mail.to, "a@b.com");
        assert!(mail.html.contains(".Foo"));
        assert!(mail.html.contains("Bedrock Edition"));
    }

    #[test]
    fn new_ticket_alert_contains_owner_link() {
        let owner_link = "https://tickets.example.com/ticket?abc";

        let mail = new_ticket_alert(&ticket(), owner_link, "operator@example.com");

        assert_eq!(mail.to, "operator@example.com");
        assert!(mail.subject.contains(".Foo"));
        assert!(mail.html.contains(owner_link));
    }

    #[test]
    fn operator_message_embeds_text_verbatim() {
        let text = "I'll start <b>tomorrow</b>";

        let mail = operator_message(&ticket(), text);

        assert_eq!(mail.to, "a@b.com");
        assert!(mail.html.contains(text));
    }

    #[test]
    fn every_mail_quotes_short_ticket_id() {
        let mut ticket = ticket();
        ticket.id = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap();
        let footer = "Ticket ID: 123E4567";

        let mails = [
            submission_confirmation(&ticket),
            new_ticket_alert(&ticket, "https://tickets.example.com/ticket?abc", "op@b.com"),
            operator_message(&ticket, "hello"),
            review_request(&ticket),
        ];

        for mail in mails {
            assert!(mail.html.contains(footer), "{}", mail.subject);
        }
    }

    #[test]
    fn review_request_references_area_size() {
        let mail = review_request(&ticket());

        assert_eq!(mail.to, "a@b.com");
        assert!(mail.html.contains("32x32"));
    }
}
