//! Global CSS styles for the portfolio page.
//!
//! State classes (`scrolled`, `active`, `error`, reveal variants) are
//! toggled by the view-state projection; everything else is static.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary: #3f51b5;
  --primary-light: #5c6bc0;
  --accent: #00bcd4;
  --text-dark: #212121;
  --text-light: #616161;
  --bg-light: #f5f7fb;
  --white: #ffffff;
  --danger: #c62828;
  --font-main: 'Poppins', 'Segoe UI', sans-serif;
  --transition: all 0.3s ease;
}

* { margin: 0; padding: 0; box-sizing: border-box; }
html { scroll-behavior: auto; }
body { font-family: var(--font-main); color: var(--text-dark); background: var(--white); }
section { padding: 100px 8%; min-height: 60vh; }
.section-title { font-size: 2.2rem; margin-bottom: 40px; text-align: center; }

/* === Navbar === */
.navbar {
  position: fixed; top: 0; left: 0; right: 0; z-index: 1000;
  display: flex; align-items: center; justify-content: space-between;
  padding: 25px 8%; background: transparent; transition: var(--transition);
}
.navbar.scrolled {
  padding: 15px 8%; background: var(--white);
  box-shadow: 0 2px 20px rgba(0, 0, 0, 0.08);
}
.logo { font-weight: 700; font-size: 1.4rem; color: var(--primary); text-decoration: none; }
.nav-links { display: flex; gap: 30px; list-style: none; }
.nav-link { color: var(--text-dark); text-decoration: none; font-weight: 500; transition: var(--transition); }
.nav-link.active, .nav-link:hover { color: var(--primary); }
.hamburger { display: none; flex-direction: column; gap: 5px; cursor: pointer; background: none; border: none; }
.hamburger span { width: 25px; height: 3px; background: var(--text-dark); transition: var(--transition); }
.hamburger.active span:nth-child(1) { transform: rotate(45deg) translate(5px, 6px); }
.hamburger.active span:nth-child(2) { opacity: 0; }
.hamburger.active span:nth-child(3) { transform: rotate(-45deg) translate(5px, -6px); }

@media (max-width: 768px) {
  .hamburger { display: flex; }
  .nav-links {
    position: fixed; top: 0; right: -100%; height: 100vh; width: 70%;
    flex-direction: column; padding: 100px 40px; background: var(--white);
    box-shadow: -5px 0 20px rgba(0, 0, 0, 0.1); transition: var(--transition);
  }
  .nav-links.active { right: 0; }
}

/* === Hero === */
.hero { display: flex; flex-direction: column; justify-content: center; min-height: 100vh; background: var(--bg-light); }
.hero h1 { font-size: 3rem; }
.hero .role { color: var(--primary); font-size: 1.4rem; margin: 10px 0 30px; }
.btn { display: inline-block; padding: 12px 30px; border-radius: 30px; cursor: pointer; font-weight: 600; text-decoration: none; transition: var(--transition); }
.btn-primary { background: var(--primary); color: var(--white); border: 2px solid var(--primary); }
.btn-outline { background: transparent; color: var(--primary); border: 2px solid var(--primary); }

/* === Reveal === */
.reveal, .reveal-left, .reveal-right { opacity: 0; transition: all 0.8s ease; }
.reveal { transform: translateY(50px); }
.reveal-left { transform: translateX(-50px); }
.reveal-right { transform: translateX(50px); }
.reveal.active, .reveal-left.active, .reveal-right.active { opacity: 1; transform: none; }

/* === Skills === */
.skills-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 30px; }
.skill-category { padding: 30px; border-radius: 12px; background: var(--bg-light); }
.skill-item { margin-bottom: 18px; }
.skill-info { display: flex; justify-content: space-between; margin-bottom: 6px; }
.skill-bar { height: 8px; border-radius: 4px; background: #e0e0e0; overflow: hidden; }
.skill-progress { height: 100%; border-radius: 4px; background: linear-gradient(90deg, var(--primary), var(--accent)); transition: width 1s ease; }

/* === Projects === */
.project-filters { display: flex; justify-content: center; gap: 15px; margin-bottom: 40px; flex-wrap: wrap; }
.filter-btn { padding: 8px 22px; border-radius: 20px; border: 2px solid var(--primary); background: transparent; color: var(--primary); cursor: pointer; transition: var(--transition); }
.filter-btn.active { background: var(--primary); color: var(--white); }
.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 30px; }
.project-card { padding: 25px; border-radius: 12px; background: var(--white); box-shadow: 0 5px 20px rgba(0, 0, 0, 0.08); }
.project-tag { font-size: 0.8rem; color: var(--primary); text-transform: uppercase; letter-spacing: 1px; }

/* === Contact === */
.contact-form { max-width: 640px; margin: 0 auto; }
.form-group { margin-bottom: 20px; display: flex; flex-direction: column; gap: 6px; }
.form-group input, .form-group textarea { padding: 12px 15px; border: 2px solid #e0e0e0; border-radius: 8px; font: inherit; transition: var(--transition); }
.form-group input:focus, .form-group textarea:focus { outline: none; border-color: var(--primary); }
.form-group .error-message { display: none; color: var(--danger); font-size: 0.85rem; }
.form-group.error input, .form-group.error textarea { border-color: var(--danger); }
.form-group.error .error-message { display: block; }

/* === Footer === */
.footer { padding: 50px 8%; background: var(--text-dark); color: var(--white); text-align: center; }
.newsletter-form { display: flex; justify-content: center; gap: 10px; margin-top: 20px; }
.newsletter-form input { padding: 10px 15px; border-radius: 20px; border: none; min-width: 260px; }

/* === Back to top === */
.back-to-top {
  position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; z-index: 999;
  display: flex; align-items: center; justify-content: center; border: none; border-radius: 50%;
  background: linear-gradient(135deg, var(--primary), var(--primary-light)); color: var(--white);
  cursor: pointer; transition: var(--transition); box-shadow: 0 4px 15px rgba(63, 81, 181, 0.3);
}

@keyframes fadeInUp {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
