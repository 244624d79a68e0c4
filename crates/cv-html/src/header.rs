use cv_parser::Header;

use crate::text::escape;

const LOCATION_ICON: &str = r#"<svg class="w-3.5 h-3.5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
              <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"/>
              <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 11a3 3 0 11-6 0 3 3 0 016 0z"/>
            </svg>"#;

const EMAIL_ICON: &str = r#"<svg class="w-3.5 h-3.5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
              <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"/>
            </svg>"#;

const PHONE_ICON: &str = r#"<svg class="w-3.5 h-3.5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
              <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"/>
            </svg>"#;

const PROFILE_ICON: &str = r#"<svg class="w-3.5 h-3.5" fill="currentColor" viewBox="0 0 24 24">
              <path d="M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z"/>
            </svg>"#;

/// Build the header fragment: name, title, photo, and one contact entry per
/// populated contact field. Absent fields simply produce no markup.
pub fn format_header(header: &Header, photo: &str) -> String {
    let name = escape(&header.name);

    let mut contact_entries = Vec::new();
    if let Some(location) = &header.contact.location {
        contact_entries.push(contact_span(LOCATION_ICON, &escape(location)));
    }
    if let Some(email) = &header.contact.email {
        contact_entries.push(contact_span(EMAIL_ICON, &escape(email)));
    }
    if let Some(phone) = &header.contact.phone {
        contact_entries.push(contact_span(PHONE_ICON, &escape(phone)));
    }
    if let Some(url) = &header.contact.profile_url {
        let link = format!(
            r#"<a href="{}" class="hover:underline hover:text-gray-900">LinkedIn</a>"#,
            escape(url)
        );
        contact_entries.push(contact_span(PROFILE_ICON, &link));
    }

    format!(
        r#"      <header class="mb-16">
        <div class="flex justify-between items-start gap-12 mb-6">
          <div class="flex-1">
            <h1 class="text-4xl font-light tracking-tight text-gray-900 mb-2">{name}</h1>
            <p class="text-sm text-gray-600 font-medium mb-2">{title}</p>
          </div>
          <img src="{photo}" alt="{name}" class="w-28 h-28 rounded-full object-cover object-top grayscale">
        </div>

        <div class="flex flex-wrap gap-x-6 gap-y-1 text-xs text-gray-600">
{contacts}
        </div>
      </header>"#,
        name = name,
        title = escape(&header.title),
        photo = escape(photo),
        contacts = contact_entries.join("\n"),
    )
}

fn contact_span(icon: &str, content: &str) -> String {
    format!(
        r#"          <span class="flex items-center gap-1.5">
            {icon}
            {content}
          </span>"#
    )
}
