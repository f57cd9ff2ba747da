pub fn render_index(date: &str, calories_today: f64, items: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{KCAL}}", &(calories_today.round() as i64).to_string())
        .replace("{{ITEMS}}", &items.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>NutriPlan</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef7f0;
      --bg-2: #cdeedd;
      --ink: #21312a;
      --accent: #0f9d6a;
      --accent-2: #2f4858;
      --warn: #e06c3a;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(15, 157, 106, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f4ec 60%, #f4faf6 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6b62;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7f8b83;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.kcal {
      color: var(--accent);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #64706a;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    section.view {
      display: grid;
      gap: 18px;
    }

    .hidden {
      display: none !important;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .bar-row {
      display: grid;
      gap: 6px;
    }

    .bar-row .meta {
      display: flex;
      justify-content: space-between;
      font-size: 0.92rem;
    }

    .bar-row .meta .pct {
      color: #7f8b83;
    }

    .bar {
      width: 100%;
      height: 10px;
      background: rgba(47, 72, 88, 0.1);
      border-radius: 999px;
      overflow: hidden;
    }

    .bar .fill {
      height: 100%;
      width: 0;
      background: var(--accent);
      border-radius: 999px;
      transition: width 300ms ease;
    }

    .bar .fill.full {
      background: var(--warn);
    }

    .week {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
      text-align: center;
    }

    .week .day {
      border-radius: 14px;
      padding: 10px 4px;
      display: grid;
      gap: 4px;
    }

    .week .day.today {
      background: rgba(15, 157, 106, 0.12);
    }

    .week .wd {
      font-size: 0.75rem;
      color: #7f8b83;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    .week .kcal {
      font-weight: 600;
      color: var(--accent);
    }

    .week .kcal.zero {
      color: #b9c3bd;
    }

    .week .items {
      font-size: 0.72rem;
      color: #99a39c;
    }

    .log-list {
      display: grid;
      gap: 10px;
    }

    .log-item {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
      background: #f6faf7;
      border-radius: 14px;
      padding: 12px 16px;
    }

    .log-item .who {
      display: grid;
      gap: 2px;
    }

    .log-item .name {
      font-weight: 600;
    }

    .log-item .sub {
      font-size: 0.82rem;
      color: #7f8b83;
    }

    .log-item .macros {
      font-size: 0.82rem;
      color: #64706a;
      white-space: nowrap;
    }

    .log-item button {
      background: transparent;
      border: none;
      color: #b4544a;
      font-weight: 600;
      cursor: pointer;
      padding: 6px;
    }

    form.add {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
      gap: 10px;
      align-items: end;
    }

    form.add label {
      display: grid;
      gap: 4px;
      font-size: 0.8rem;
      color: #64706a;
    }

    form.add input, form.add select, .search-row input {
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 0.95rem;
      font-family: inherit;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(15, 157, 106, 0.3);
    }

    .btn.ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      box-shadow: none;
    }

    .search-row {
      display: flex;
      gap: 10px;
    }

    .search-row input {
      flex: 1;
    }

    .meal-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
      gap: 14px;
    }

    .meal-card {
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 16px;
      overflow: hidden;
      cursor: pointer;
      display: grid;
    }

    .meal-card img {
      width: 100%;
      aspect-ratio: 1;
      object-fit: cover;
    }

    .meal-card .name {
      padding: 10px 12px;
      font-weight: 600;
      font-size: 0.9rem;
    }

    .meal-detail h3 {
      margin: 0;
    }

    .meal-detail ol, .meal-detail ul {
      margin: 0;
      padding-left: 20px;
      display: grid;
      gap: 6px;
      font-size: 0.92rem;
    }

    .status {
      font-size: 0.95rem;
      color: #64706a;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .muted {
      color: #8b958e;
      font-size: 0.9rem;
      margin: 0;
    }

    @media (max-width: 620px) {
      .app {
        padding: 26px 20px;
      }
      .week .items {
        display: none;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>NutriPlan</h1>
      <p class="subtitle">Log what you eat and watch daily progress against your targets.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Date</span>
        <span id="date" class="value">{{DATE}}</span>
      </div>
      <div class="stat">
        <span class="label">Calories today</span>
        <span id="kcal-today" class="value kcal">{{KCAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Items logged</span>
        <span id="items-logged" class="value">{{ITEMS}}</span>
      </div>
    </section>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="today" role="tab" aria-selected="true">Today</button>
      <button class="tab" type="button" data-tab="week" role="tab" aria-selected="false">Week</button>
      <button class="tab" type="button" data-tab="log" role="tab" aria-selected="false">Food log</button>
      <button class="tab" type="button" data-tab="recipes" role="tab" aria-selected="false">Recipes</button>
    </div>

    <section class="view" id="view-today">
      <div class="card" id="progress-card">
        <h3 style="margin:0">Daily progress</h3>
        <div class="bar-row" data-nutrient="calories">
          <div class="meta"><span>Calories</span><span><span class="val">0</span> kcal <span class="pct">0%</span></span></div>
          <div class="bar"><div class="fill"></div></div>
        </div>
        <div class="bar-row" data-nutrient="protein">
          <div class="meta"><span>Protein</span><span><span class="val">0</span> g <span class="pct">0%</span></span></div>
          <div class="bar"><div class="fill"></div></div>
        </div>
        <div class="bar-row" data-nutrient="carbs">
          <div class="meta"><span>Carbs</span><span><span class="val">0</span> g <span class="pct">0%</span></span></div>
          <div class="bar"><div class="fill"></div></div>
        </div>
        <div class="bar-row" data-nutrient="fat">
          <div class="meta"><span>Fat</span><span><span class="val">0</span> g <span class="pct">0%</span></span></div>
          <div class="bar"><div class="fill"></div></div>
        </div>
      </div>

      <div class="card">
        <h3 style="margin:0">Log a food</h3>
        <form class="add" id="add-form">
          <label>Name <input name="name" required placeholder="Banana" /></label>
          <label>Brand <input name="brand" placeholder="optional" /></label>
          <label>Type
            <select name="type">
              <option value="Product">Product</option>
              <option value="Meal">Meal</option>
            </select>
          </label>
          <label>Calories <input name="calories" type="number" min="0" step="any" value="0" /></label>
          <label>Protein (g) <input name="protein" type="number" min="0" step="any" value="0" /></label>
          <label>Carbs (g) <input name="carbs" type="number" min="0" step="any" value="0" /></label>
          <label>Fat (g) <input name="fat" type="number" min="0" step="any" value="0" /></label>
          <button class="btn" type="submit">Add to log</button>
        </form>
      </div>
    </section>

    <section class="view hidden" id="view-week">
      <div class="card">
        <h3 style="margin:0">Last 7 days</h3>
        <div class="week" id="week-strip"></div>
      </div>
    </section>

    <section class="view hidden" id="view-log">
      <div class="card">
        <div style="display:flex; justify-content:space-between; align-items:center">
          <h3 style="margin:0">Food log (<span id="log-count">0</span>)</h3>
          <button class="btn ghost" id="clear-log" type="button">Clear all</button>
        </div>
        <p class="muted hidden" id="log-empty">Nothing logged yet. Add a food from the Today tab.</p>
        <div class="log-list" id="log-list"></div>
      </div>
    </section>

    <section class="view hidden" id="view-recipes">
      <div class="card">
        <div class="search-row">
          <input id="meal-search" placeholder="Search recipes, e.g. chicken" />
          <button class="btn" id="meal-search-btn" type="button">Search</button>
        </div>
        <div class="meal-grid" id="meal-grid"></div>
        <div class="meal-detail card hidden" id="meal-detail"></div>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="muted">Entries are stamped with the server's calendar day. Daily targets: 2000 kcal, 50 g protein, 250 g carbs, 65 g fat.</p>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const views = {
      today: document.getElementById('view-today'),
      week: document.getElementById('view-week'),
      log: document.getElementById('view-log'),
      recipes: document.getElementById('view-recipes')
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      Object.entries(views).forEach(([name, el]) => {
        el.classList.toggle('hidden', name !== tab);
      });
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    const renderProgress = (data) => {
      document.getElementById('date').textContent = data.date;
      document.getElementById('kcal-today').textContent = data.progress.calories.rounded;
      document.querySelectorAll('#progress-card .bar-row').forEach((row) => {
        const entry = data.progress[row.dataset.nutrient];
        row.querySelector('.val').textContent = entry.rounded;
        row.querySelector('.pct').textContent = entry.percent + '%';
        const fill = row.querySelector('.fill');
        fill.style.width = entry.percent + '%';
        fill.classList.toggle('full', entry.percent >= 100);
      });
    };

    const renderWeek = (data) => {
      const strip = document.getElementById('week-strip');
      const today = document.getElementById('date').textContent;
      strip.innerHTML = data.days.map((day) => `
        <div class="day ${day.date === today ? 'today' : ''}">
          <span class="wd">${day.weekday}</span>
          <span>${day.date.slice(8)}</span>
          <span class="kcal ${day.calories > 0 ? '' : 'zero'}">${Math.round(day.calories)}</span>
          <span class="items">${day.items} item${day.items === 1 ? '' : 's'}</span>
        </div>
      `).join('');
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"]/g, (c) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;' }[c]));

    const renderLog = (data) => {
      document.getElementById('log-count').textContent = data.count;
      document.getElementById('items-logged').textContent = data.count;
      document.getElementById('log-empty').classList.toggle('hidden', data.count > 0);
      document.getElementById('log-list').innerHTML = data.entries.map((item) => `
        <div class="log-item">
          <div class="who">
            <span class="name">${escapeHtml(item.name)}</span>
            <span class="sub">${escapeHtml(item.brand || '')} ${item.type} &middot; ${item.date} ${item.time}</span>
          </div>
          <span class="macros">${Math.round(item.calories)} kcal &middot; ${item.protein}g P / ${item.carbs}g C / ${item.fat}g F</span>
          <button type="button" data-id="${escapeHtml(item.id)}">Remove</button>
        </div>
      `).join('');
    };

    const getJson = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const refresh = async () => {
      const [progress, week, log] = await Promise.all([
        getJson('/api/progress'),
        getJson('/api/week'),
        getJson('/api/log')
      ]);
      renderProgress(progress);
      renderWeek(week);
      renderLog(log);
    };

    document.getElementById('add-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const body = {
        name: form.get('name'),
        brand: form.get('brand') || null,
        type: form.get('type'),
        calories: Number(form.get('calories')) || 0,
        protein: Number(form.get('protein')) || 0,
        carbs: Number(form.get('carbs')) || 0,
        fat: Number(form.get('fat')) || 0
      };
      try {
        const res = await fetch('/api/log', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(body)
        });
        if (!res.ok) {
          throw new Error(await res.text());
        }
        event.target.reset();
        setStatus('Logged', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('log-list').addEventListener('click', async (event) => {
      const id = event.target.dataset && event.target.dataset.id;
      if (!id) {
        return;
      }
      await fetch('/api/log/' + encodeURIComponent(id), { method: 'DELETE' });
      await refresh();
    });

    document.getElementById('clear-log').addEventListener('click', async () => {
      if (!confirm('Clear all logged foods?')) {
        return;
      }
      await fetch('/api/log?confirm=true', { method: 'DELETE' });
      setStatus('Log cleared', 'ok');
      await refresh();
    });

    const renderMeals = (meals) => {
      const grid = document.getElementById('meal-grid');
      if (!meals.length) {
        grid.innerHTML = '<p class="muted">No recipes found.</p>';
        return;
      }
      grid.innerHTML = meals.map((meal) => `
        <div class="meal-card" data-id="${escapeHtml(meal.id)}">
          ${meal.thumb ? `<img src="${escapeHtml(meal.thumb)}" alt="${escapeHtml(meal.name)}" loading="lazy" />` : ''}
          <span class="name">${escapeHtml(meal.name)}</span>
        </div>
      `).join('');
    };

    const searchMeals = async () => {
      const query = document.getElementById('meal-search').value.trim();
      try {
        const data = await getJson('/api/meals?q=' + encodeURIComponent(query));
        renderMeals(data.meals || []);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('meal-search-btn').addEventListener('click', searchMeals);
    document.getElementById('meal-search').addEventListener('keypress', (event) => {
      if (event.key === 'Enter') {
        searchMeals();
      }
    });

    document.getElementById('meal-grid').addEventListener('click', async (event) => {
      const card = event.target.closest('.meal-card');
      if (!card) {
        return;
      }
      try {
        const meal = await getJson('/api/meals/' + encodeURIComponent(card.dataset.id));
        const detail = document.getElementById('meal-detail');
        detail.classList.remove('hidden');
        detail.innerHTML = `
          <h3>${escapeHtml(meal.name)}</h3>
          <p class="muted">${escapeHtml([meal.category, meal.area].filter(Boolean).join(' &middot; '))}</p>
          <h4 style="margin:0">Ingredients (${meal.ingredients.length})</h4>
          <ul>${meal.ingredients.map((ing) => `<li>${escapeHtml(ing.measure)} ${escapeHtml(ing.name)}</li>`).join('')}</ul>
          <h4 style="margin:0">Instructions</h4>
          <ol>${meal.steps.map((step) => `<li>${escapeHtml(step)}</li>`).join('')}</ol>
        `;
        detail.scrollIntoView({ behavior: 'smooth' });
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_index_substitutes_placeholders() {
        let page = render_index("2026-08-27", 1849.6, 4);
        assert!(page.contains(">2026-08-27<"));
        assert!(page.contains(">1850<"));
        assert!(page.contains(">4<"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn stylesheet_defines_generic_hidden_rule() {
        // every element the page script toggles with classList must actually
        // disappear, not just the tabbed view sections
        assert!(INDEX_HTML.contains(".hidden {\n      display: none !important;\n    }"));
        for toggled in ["id=\"log-empty\"", "id=\"meal-detail\""] {
            assert!(INDEX_HTML.contains(toggled));
        }
    }
}
