use askama::Template;

use crate::controller::ControllerSnapshot;
use crate::markdown::render_markdown;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: "📄",
        title: "Summarize any article",
        description: "Copy and paste a URL or text to generate a concise summary",
    },
    Feature {
        icon: "🔑",
        title: "Extract key points",
        description: "Get the most important information from the article",
    },
    Feature {
        icon: "📊",
        title: "Structured output",
        description: "Receive a well-organized summary with main ideas and conclusions",
    },
    Feature {
        icon: "⏱️",
        title: "Save time",
        description: "Quickly grasp the essence of long articles",
    },
];

/// Open/closed state of the collapsible mobile menu. Lives in the page's
/// query string and never touches the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn from_query(menu: Option<&str>) -> Self {
        NavState {
            menu_open: menu == Some("open"),
        }
    }

    pub fn toggled(self) -> Self {
        NavState {
            menu_open: !self.menu_open,
        }
    }

    /// Link that flips the menu when followed.
    pub fn toggle_href(self) -> &'static str {
        if self.toggled().menu_open { "/?menu=open" } else { "/" }
    }
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>ClipNote.ai</title>
    <script src="https://cdn.tailwindcss.com?plugins=typography"></script>
  </head>
  <body>
    <div class="min-h-screen bg-[#1c1c1c] text-white flex flex-col">
      <nav class="w-full bg-[#252525] p-4">
        <div class="container mx-auto flex justify-between items-center">
          <div class="flex items-center space-x-2"><span class="font-bold text-lg">ClipNote.ai</span></div>
          <div class="block sm:hidden">
            <a id="menu-toggle" href="{{ toggle_href|safe }}" class="text-white focus:outline-none">
              <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="{% if menu_open %}M6 18L18 6M6 6l12 12{% else %}M4 6h16M4 12h16m-7 6h7{% endif %}"></path>
              </svg>
            </a>
          </div>
          <div class="hidden sm:flex space-x-4">
            <a href="/" class="text-gray-300 hover:text-white">Home</a>
            <a href="https://github.com/himanshumahesh" target="_blank" rel="noopener noreferrer"><button class="bg-blue-600 text-white px-4 py-2 rounded-md">GitHub</button></a>
          </div>
        </div>
        <div id="mobile-menu" class="sm:hidden flex flex-col space-y-4 mt-4 transition-all duration-300 ease-in-out {% if menu_open %}block{% else %}hidden{% endif %}">
          <a href="/" class="text-gray-300 hover:text-white">Home</a>
          <a href="https://github.com/himanshumahesh" target="_blank" rel="noopener noreferrer"><button class="bg-blue-600 text-white px-4 py-2 rounded-md">GitHub</button></a>
        </div>
      </nav>
      <main class="w-full px-4 py-8">
        <div class="bg-gradient-to-r from-[#2c3e50] via-[#4b79a1] to-[#24243e] p-8 mb-8 text-center max-w-4xl mx-auto">
          <h1 class="text-4xl font-bold mb-4">AI-powered Article Summarization</h1>
          <p class="mb-6">Paste a URL or text to get an instant, structured summary of any article</p>
          <form method="post" action="/" class="flex justify-center flex-col sm:flex-row items-center space-y-4 sm:space-y-0 sm:space-x-4">
            <input type="text" name="input" value="{{ input }}" placeholder="Paste a URL or text here" class="bg-[#2b2f36] text-white rounded-md py-2 px-4 w-full sm:w-auto flex-1 focus:outline-none focus:ring-2 focus:ring-blue-500">
            <button type="submit" class="bg-yellow-500 text-black font-semibold py-2 px-6 rounded-md hover:bg-yellow-400 transition-colors w-full sm:w-auto"{% if loading %} disabled{% endif %}>{% if loading %}Summarizing...{% else %}Summarize{% endif %}</button>
          </form>
        </div>
        {% match summary_html %}
        {% when Some with (html) %}
        <div id="summary" class="bg-[#252525] p-6 rounded-md mb-8 max-w-4xl mx-auto">
          <h2 class="text-xl font-semibold mb-2">Here's a brief summary of the article:</h2>
          <div class="text-gray-300 prose prose-invert max-w-none">{{ html|safe }}</div>
        </div>
        {% when None %}
        {% endmatch %}
        <h2 class="text-2xl font-bold mb-4 text-center">How it works</h2>
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-8 px-4">
          {% for feature in features %}
          <div class="bg-[#252525] p-6 rounded-lg shadow-lg hover:bg-[#303030] transition-all">
            <div class="text-4xl mb-2">{{ feature.icon }}</div>
            <h2 class="text-xl font-semibold mb-2">{{ feature.title }}</h2>
            <p class="text-[#9ca3af]">{{ feature.description }}</p>
          </div>
          {% endfor %}
        </div>
      </main>
    </div>
  </body>
</html>"#,
    ext = "html"
)]
struct PageTemplate<'a> {
    input: &'a str,
    loading: bool,
    summary_html: Option<String>,
    menu_open: bool,
    toggle_href: &'static str,
    features: &'static [Feature],
}

/// Renders the page for the current controller state. The input is escaped
/// by the template; the summary HTML is inserted as rendered.
pub fn render_page(snapshot: &ControllerSnapshot, nav: NavState) -> askama::Result<String> {
    let summary_html = (!snapshot.summary.is_empty()).then(|| render_markdown(&snapshot.summary));
    PageTemplate {
        input: &snapshot.input,
        loading: snapshot.loading,
        summary_html,
        menu_open: nav.menu_open,
        toggle_href: nav.toggle_href(),
        features: &FEATURES,
    }
    .render()
}
