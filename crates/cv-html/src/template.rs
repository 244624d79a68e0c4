//! Fixed document shell. The core fills the placeholders; the surrounding
//! boilerplate (fonts, print rules, action bar) is static.

/// Placeholder values for one rendered document.
pub struct ShellInputs<'a> {
    pub lang: &'a str,
    pub document_title: &'a str,
    pub name: &'a str,
    pub header_html: &'a str,
    pub sections_html: &'a str,
    pub print_label: &'a str,
    pub share_label: &'a str,
    pub link_copied_label: &'a str,
    pub generated_at: Option<&'a str>,
}

const SHELL: &str = r#"<!DOCTYPE html>
{{generated}}<html lang="{{lang}}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{document_title}} – {{name}}</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap');

    @page {
      size: A4;
      margin: 16mm 18mm;
    }

    @media print {
      body {
        -webkit-print-color-adjust: exact;
        print-color-adjust: exact;
      }
      .page-break { page-break-before: always; }
      .no-break { break-inside: avoid; }
      .no-print { display: none !important; }
    }

    body {
      font-family: 'Inter', system-ui, -apple-system, sans-serif;
    }
  </style>
</head>

<body class="font-sans text-gray-800 bg-gray-50">

  <!-- Action Bar -->
  <div class="no-print fixed top-4 right-4 flex gap-2 z-50">
    <button onclick="window.print()"
      class="bg-white px-3 py-2 border border-gray-200 rounded-lg text-gray-600 hover:text-gray-800 hover:border-gray-400 transition-colors shadow-sm flex items-center gap-2">
      <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="18" height="18" fill="currentColor">
        <path d="M17 2C17.5523 2 18 2.44772 18 3V7H21C21.5523 7 22 7.44772 22 8V18C22 18.5523 21.5523 19 21 19H18V21C18 21.5523 17.5523 22 17 22H7C6.44772 22 6 21.5523 6 21V19H3C2.44772 19 2 18.5523 2 18V8C2 7.44772 2.44772 7 3 7H6V3C6 2.44772 6.44772 2 7 2H17ZM16 17H8V20H16V17ZM20 9H4V17H6V16C6 15.4477 6.44772 15 7 15H17C17.5523 15 18 15.4477 18 16V17H20V9ZM8 10V12H5V10H8ZM16 4H8V7H16V4Z"></path>
      </svg>
      {{print_label}}
    </button>
    <button onclick="if(navigator.share){navigator.share({title:'{{name}} - CV',url:window.location.href})}else{navigator.clipboard.writeText(window.location.href);alert('{{link_copied_label}}')}"
      class="bg-white px-3 py-2 border border-gray-200 rounded-lg text-gray-600 hover:text-gray-800 hover:border-gray-400 transition-colors shadow-sm flex items-center gap-2">
      <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="18" height="18" fill="currentColor">
        <path d="M13.1202 17.0228L8.92129 14.7324C8.19135 15.5125 7.15261 16 6 16C3.79086 16 2 14.2091 2 12C2 9.79086 3.79086 8 6 8C7.15255 8 8.19125 8.48746 8.92118 9.26746L13.1202 6.97713C13.0417 6.66441 13 6.33707 13 6C13 3.79086 14.7909 2 17 2C19.2091 2 21 3.79086 21 6C21 8.20914 19.2091 10 17 10C15.8474 10 14.8087 9.51251 14.0787 8.73246L9.87977 11.0228C9.9583 11.3355 10 11.6629 10 12C10 12.3371 9.95831 12.6644 9.87981 12.9771L14.0788 15.2675C14.8087 14.4875 15.8474 14 17 14C19.2091 14 21 15.7909 21 18C21 20.2091 19.2091 22 17 22C14.7909 22 13 20.2091 13 18C13 17.6629 13.0417 17.3355 13.1202 17.0228ZM6 14C7.10457 14 8 13.1046 8 12C8 10.8954 7.10457 10 6 10C4.89543 10 4 10.8954 4 12C4 13.1046 4.89543 14 6 14ZM17 8C18.1046 8 19 7.10457 19 6C19 4.89543 18.1046 4 17 4C15.8954 4 15 4.89543 15 6C15 7.10457 15.8954 8 17 8ZM17 20C18.1046 20 19 19.1046 19 18C19 16.8954 18.1046 16 17 16C15.8954 16 15 16.8954 15 18C15 19.1046 15.8954 20 17 20Z"></path>
      </svg>
      {{share_label}}
    </button>
  </div>

  <!-- CV Container -->
  <div class="max-w-4xl mx-auto my-8 bg-white shadow-lg print:shadow-none">
    <div class="px-12 py-10 print:px-0 print:py-0">

{{header}}

{{sections}}

    </div>
  </div>

</body>
</html>
"#;

/// Fill the shell's placeholders. Token replacement keeps the literal CSS
/// and script braces out of any format machinery.
pub fn fill_shell(inputs: &ShellInputs<'_>) -> String {
    let generated = match inputs.generated_at {
        Some(timestamp) => format!("<!-- generated {timestamp} -->\n"),
        None => String::new(),
    };

    SHELL
        .replace("{{generated}}", &generated)
        .replace("{{lang}}", inputs.lang)
        .replace("{{document_title}}", inputs.document_title)
        .replace("{{name}}", inputs.name)
        .replace("{{print_label}}", inputs.print_label)
        .replace("{{share_label}}", inputs.share_label)
        .replace("{{link_copied_label}}", inputs.link_copied_label)
        .replace("{{header}}", inputs.header_html)
        .replace("{{sections}}", inputs.sections_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs<'a>(generated_at: Option<&'a str>) -> ShellInputs<'a> {
        ShellInputs {
            lang: "de",
            document_title: "Lebenslauf",
            name: "Jane Doe",
            header_html: "<header></header>",
            sections_html: "<section></section>",
            print_label: "Drucken",
            share_label: "Teilen",
            link_copied_label: "Link kopiert!",
            generated_at,
        }
    }

    #[test]
    fn fills_every_placeholder() {
        let html = fill_shell(&inputs(None));

        assert!(html.contains("<html lang=\"de\">"));
        assert!(html.contains("<title>Lebenslauf – Jane Doe</title>"));
        assert!(html.contains("Drucken"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn timestamp_is_omitted_unless_provided() {
        assert!(!fill_shell(&inputs(None)).contains("<!-- generated"));
        assert!(fill_shell(&inputs(Some("2024-01-01T00:00:00Z")))
            .contains("<!-- generated 2024-01-01T00:00:00Z -->"));
    }
}
