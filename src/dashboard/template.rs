//! HTML page rendering.

use minijinja::{Environment, context};
use serde::Serialize;

use super::grid::{GridQuery, SortColumn, SortDirection};
use crate::board::domain::{Area, TaskKey, TaskRecord};
use crate::chart::{TimelineChart, svg::TimelineSvg};

const PAGE_TEMPLATE_NAME: &str = "dashboard.html";

const PAGE_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
  <style>
    body { font-family: sans-serif; margin: 1.5rem; color: #222; }
    table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
    th, td { border: 1px solid #ddd; padding: 0.3rem 0.5rem; text-align: left; }
    tr.selected { background: #e8f0fe; }
    .banner { padding: 0.5rem 1rem; margin: 1rem 0; border-radius: 4px; }
    .banner.success { background: #e6f4ea; }
    .banner.error { background: #fce8e6; }
    form { margin: 0.75rem 0; }
    fieldset { border: 1px solid #ddd; }
  </style>
</head>
<body>
  <h1>{{ title }}</h1>
  {% if banner %}
  <div class="banner {{ banner.kind }}" role="status">{{ banner.message }}</div>
  {% endif %}

  <section id="chart">{{ chart_svg|safe }}</section>

  {% macro grid_state(text, column, direction) -%}
  <input type="hidden" name="filter" value="{{ text }}">
  <input type="hidden" name="sort" value="{{ column }}">
  <input type="hidden" name="dir" value="{{ direction }}">
  {%- endmacro %}

  <section id="grid">
    <form method="get" action="/" class="grid-query">
      <label>Filter <input type="search" name="filter" value="{{ filter }}"></label>
      <label>Sort
        <select name="sort">
          {% for column in columns %}
          <option value="{{ column.value }}"{% if column.value == sort %} selected{% endif %}>{{ column.label }}</option>
          {% endfor %}
        </select>
      </label>
      <select name="dir">
        <option value="asc"{% if dir == "asc" %} selected{% endif %}>Ascending</option>
        <option value="desc"{% if dir == "desc" %} selected{% endif %}>Descending</option>
      </select>
      {% if selected %}<input type="hidden" name="selected" value="{{ selected }}">{% endif %}
      <button type="submit">Apply</button>
    </form>

    <table>
      <thead>
        <tr>
          <th></th>
          {% for column in columns %}<th>{{ column.label }}</th>{% endfor %}
          <th></th>
        </tr>
      </thead>
      <tbody>
        {% for row in rows %}
        {% if row.key == selected %}
        <tr data-row="{{ row.key }}" class="selected">
          <td><a href="/?filter={{ filter|urlencode }}&amp;sort={{ sort }}&amp;dir={{ dir }}">done</a></td>
          <td>{{ row.key }}</td>
          <td><input name="area" list="areas" value="{{ row.area }}" form="edit-task" required></td>
          <td><input name="start_date" type="date" value="{{ row.start_date }}" form="edit-task" required></td>
          <td><input name="end_date" type="date" value="{{ row.end_date }}" form="edit-task" required></td>
          <td><input name="topic" value="{{ row.topic }}" form="edit-task" required></td>
          <td><input name="progress" type="number" min="0" max="100" value="{{ row.progress }}" form="edit-task"></td>
          <td><input name="leader" value="{{ row.leader }}" form="edit-task"></td>
          <td><input name="member" value="{{ row.member }}" form="edit-task"></td>
          <td><button type="submit" form="delete-task" name="key" value="{{ row.key }}">Delete</button></td>
        </tr>
        {% else %}
        <tr data-row="{{ row.key }}">
          <td><a href="/?selected={{ row.key }}&amp;filter={{ filter|urlencode }}&amp;sort={{ sort }}&amp;dir={{ dir }}">select</a></td>
          <td>{{ row.key }}</td>
          <td>{{ row.area }}</td>
          <td>{{ row.start_date }}</td>
          <td>{{ row.end_date }}</td>
          <td>{{ row.topic }}</td>
          <td>{{ row.progress }}%</td>
          <td>{{ row.leader }}</td>
          <td>{{ row.member }}</td>
          <td><button type="submit" form="delete-task" name="key" value="{{ row.key }}">Delete</button></td>
        </tr>
        {% endif %}
        {% else %}
        <tr><td colspan="10">No rows</td></tr>
        {% endfor %}
      </tbody>
    </table>

    <form method="post" action="/tasks/delete" id="delete-task">
      {{ grid_state(filter, sort, dir) }}
      <label>Password for row deletes
        <input name="password" type="password" placeholder="Password" required>
      </label>
    </form>

    {% if selected %}
    <form method="post" action="/tasks/edit" id="edit-task">
      <fieldset>
        <legend>Edit task {{ selected }}</legend>
        <input type="hidden" name="key" value="{{ selected }}">
        {{ grid_state(filter, sort, dir) }}
        <input name="password" type="password" placeholder="Password" required>
        <button type="submit">Save row</button>
      </fieldset>
    </form>
    {% endif %}
  </section>

  <datalist id="areas">
    {% for area in areas %}<option value="{{ area }}">{% endfor %}
  </datalist>

  <form method="post" action="/tasks" id="add-task">
    <fieldset>
      <legend>Add task</legend>
      {{ grid_state(filter, sort, dir) }}
      <input name="area" list="areas" placeholder="Area" required>
      <input name="start_date" type="date" required>
      <input name="end_date" type="date" required>
      <input name="topic" placeholder="Topic" required>
      <input name="progress" type="number" min="0" max="100" value="0">
      <input name="leader" placeholder="Leader">
      <input name="member" placeholder="Member">
      <input name="password" type="password" placeholder="Password" required>
      <button type="submit">Add</button>
    </fieldset>
  </form>

  {% if selected %}
  <form method="post" action="/tasks/subtasks" id="add-subtask">
    <fieldset>
      <legend>Add subtask under {{ selected }}</legend>
      <input type="hidden" name="parent" value="{{ selected }}">
      {{ grid_state(filter, sort, dir) }}
      <input name="area" list="areas" placeholder="Area" required>
      <input name="start_date" type="date" required>
      <input name="end_date" type="date" required>
      <input name="topic" placeholder="Topic" required>
      <input name="progress" type="number" min="0" max="100" value="0">
      <input name="leader" placeholder="Leader">
      <input name="member" placeholder="Member">
      <input name="password" type="password" placeholder="Password" required>
      <button type="submit">Add subtask</button>
    </fieldset>
  </form>
  {% endif %}
</body>
</html>
"##;

const COLUMNS: [(SortColumn, &str, &str); 8] = [
    (SortColumn::Key, "key", "Key"),
    (SortColumn::Area, "area", "Area"),
    (SortColumn::Start, "start", "Start"),
    (SortColumn::End, "end", "End"),
    (SortColumn::Topic, "topic", "Topic"),
    (SortColumn::Progress, "progress", "Progress"),
    (SortColumn::Leader, "leader", "Leader"),
    (SortColumn::Member, "member", "Member"),
];

#[derive(Serialize)]
struct ColumnView {
    value: &'static str,
    label: &'static str,
}

/// Outcome message shown above the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub(super) enum Banner {
    Success(String),
    Error(String),
}

/// Everything one page render needs.
pub(super) struct DashboardPage<'a> {
    pub rows: &'a [TaskRecord],
    pub chart: &'a TimelineChart,
    pub grid: &'a GridQuery,
    pub selected: Option<TaskKey>,
    pub banner: Option<Banner>,
}

/// Renders the dashboard page: the timeline chart, the grid and the
/// mutation forms.
#[derive(Debug)]
pub struct PageRenderer {
    environment: Environment<'static>,
    title: String,
    chart: TimelineSvg,
}

impl PageRenderer {
    /// Creates a renderer with the given page and chart title.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when the page template fails to
    /// compile.
    pub fn new(title: impl Into<String>, chart: TimelineSvg) -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        environment.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self {
            environment,
            title: title.into(),
            chart,
        })
    }

    pub(super) fn render(&self, page: &DashboardPage<'_>) -> Result<String, minijinja::Error> {
        let chart_svg = self.chart.render(page.chart, &self.title);
        let rows = page.grid.apply(page.rows);
        let columns: Vec<ColumnView> = COLUMNS
            .iter()
            .map(|&(_, value, label)| ColumnView { value, label })
            .collect();
        let sort = COLUMNS
            .iter()
            .find(|(column, _, _)| *column == page.grid.sort)
            .map_or("key", |&(_, value, _)| value);
        let dir = match page.grid.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        let areas: Vec<String> = Area::KNOWN
            .into_iter()
            .map(|area| area.label().to_owned())
            .collect();

        self.environment
            .get_template(PAGE_TEMPLATE_NAME)?
            .render(context! {
                title => &self.title,
                chart_svg,
                rows,
                columns,
                sort,
                dir,
                filter => page.grid.filter.as_deref().unwrap_or_default(),
                selected => page.selected.map(TaskKey::value),
                banner => &page.banner,
                areas,
            })
    }
}
