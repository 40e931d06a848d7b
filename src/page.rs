/// Replaced with the three.js module URL when the page is built.
pub const THREE_URL_SLOT: &str = "{{THREE_URL}}";

pub const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Atomic Visualizer</title>
    <link rel="preconnect" href="https://fonts.googleapis.com" />
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
    <link href="https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap" rel="stylesheet" />
    <style>
      html, body { margin: 0; padding: 0; min-height: 100%; background: #0b0c10; color: #e6e6e6; font-family: "Space Grotesk", "Segoe UI", sans-serif; }
      #gl { position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 2; display: block; }
      .page { max-width: 1280px; margin: 0 auto; padding: 16px 24px; position: relative; z-index: 1; }
      #nav { display: flex; gap: 8px; align-items: center; margin-bottom: 16px; }
      #nav .brand { font-size: 16px; font-weight: 600; letter-spacing: 0.02em; margin-right: auto; }
      #nav button, #nav a { background: #11151b; color: #e6e6e6; border: 1px solid #2a2f36; border-radius: 8px; padding: 6px 12px; font-size: 12px; cursor: pointer; text-decoration: none; font-family: inherit; }
      #nav button:hover, #nav a:hover { border-color: #3c6a9e; }
      #nav .active { background: #1a2736; border-color: #3c6a9e; }
      #palette { display: grid; grid-template-columns: repeat(10, minmax(0, 1fr)); gap: 6px; justify-items: center; }
      .element-card { border-radius: 50%; width: 60px; height: 60px; display: flex; align-items: center; justify-content: center; margin: 5px; cursor: pointer; transition: transform 0.2s; color: #111; border: 1px solid #2a2f36; user-select: none; }
      .element-card:hover { transform: scale(1.1); }
      .workspace { border: 2px dashed #3a4450; min-height: 600px; margin: 20px 0; position: relative; border-radius: 10px; }
      #workspace { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 12px; margin: 20px 0; }
      .plot { background: rgba(10,12,16,0.9); border: 1px solid #2a2f36; border-radius: 10px; padding: 8px; }
      .plot-title { font-size: 12px; color: #9aa3ad; display: flex; align-items: center; gap: 6px; }
      .swatch { width: 10px; height: 10px; border-radius: 50%; display: inline-block; }
      .plot-view { width: 100%; height: 280px; }
      #status { font-size: 12px; color: #b2bac4; min-height: 16px; }
    </style>
  </head>
  <body>
    <canvas id="gl"></canvas>
    <div class="page">
      <div id="nav">
        <div class="brand">Atomic Visualizer</div>
        <button id="navHome" class="active">Home</button>
        <button id="navClear">Clear</button>
        <button id="navView">Shells</button>
        <a id="navLogin" href="/login">Login</a>
      </div>
      <div id="palette"></div>
      <div id="status"></div>
      <div id="workspace"></div>
    </div>
    <script type="importmap">
      {
        "imports": {
          "three": "{{THREE_URL}}"
        }
      }
    </script>
    <script type="module">
      import * as THREE from "three";

      const paletteEl = document.getElementById("palette");
      const workspaceEl = document.getElementById("workspace");
      const statusEl = document.getElementById("status");
      const viewButton = document.getElementById("navView");

      const renderer = new THREE.WebGLRenderer({ canvas: document.getElementById("gl"), antialias: true, alpha: true });
      renderer.setPixelRatio(window.devicePixelRatio || 1);
      renderer.setClearColor(0x000000, 0);
      renderer.setScissorTest(true);

      let viewMode = "ring";
      let lastView = { empty: true, items: [] };
      let plots = [];
      let frame = 0;

      async function api(path, options) {
        const res = await fetch(path, Object.assign({ credentials: "same-origin" }, options || {}));
        if (!res.ok) {
          throw new Error(await res.text());
        }
        return res.json();
      }

      function buildPalette(elements) {
        paletteEl.innerHTML = "";
        for (const el of elements) {
          const card = document.createElement("div");
          card.className = "element-card";
          card.style.background = el.color;
          card.title = el.name ? `${el.name} (Z=${el.atomic_number})` : el.symbol;
          const label = document.createElement("strong");
          label.textContent = el.symbol;
          card.appendChild(label);
          card.addEventListener("click", () => selectElement(el.symbol));
          paletteEl.appendChild(card);
        }
      }

      async function selectElement(symbol) {
        try {
          const view = await api("/api/select", {
            method: "POST",
            headers: { "Content-Type": "application/json" },
            body: JSON.stringify({ symbol }),
          });
          renderWorkspace(view);
        } catch (err) {
          console.warn("selection rejected", err);
        }
      }

      async function clearWorkspace() {
        renderWorkspace(await api("/api/clear", { method: "POST" }));
      }

      async function refreshWorkspace() {
        renderWorkspace(await api("/api/workspace"));
      }

      function disposeScene(scene) {
        scene.traverse((obj) => {
          if (obj.geometry) obj.geometry.dispose();
          if (obj.material) {
            if (obj.material.map) obj.material.map.dispose();
            obj.material.dispose();
          }
        });
      }

      function sphere(radius, color, opacity) {
        const material = new THREE.MeshBasicMaterial({ color: new THREE.Color(color), transparent: opacity < 1, opacity });
        return new THREE.Mesh(new THREE.SphereGeometry(radius, 24, 16), material);
      }

      function circle(radius, color) {
        const pts = [];
        for (let i = 0; i < 96; i++) {
          const a = (i / 96) * Math.PI * 2;
          pts.push(new THREE.Vector3(radius * Math.cos(a), radius * Math.sin(a), 0));
        }
        const geometry = new THREE.BufferGeometry().setFromPoints(pts);
        return new THREE.LineLoop(geometry, new THREE.LineBasicMaterial({ color, transparent: true, opacity: 0.5 }));
      }

      function labelSprite(text) {
        const size = 128;
        const canvas = document.createElement("canvas");
        canvas.width = size;
        canvas.height = size;
        const ctx = canvas.getContext("2d");
        ctx.fillStyle = "black";
        ctx.font = "bold 56px Arial";
        ctx.textAlign = "center";
        ctx.textBaseline = "middle";
        ctx.fillText(text, size / 2, size / 2);
        const sprite = new THREE.Sprite(new THREE.SpriteMaterial({ map: new THREE.CanvasTexture(canvas), depthTest: false }));
        sprite.scale.set(40, 40, 1);
        return sprite;
      }

      // Nucleus and electron ring; the group spins slowly for effect only.
      function ringScene(item) {
        const scene = new THREE.Scene();
        const group = new THREE.Group();
        group.add(circle(50, 0x9aa3ad));
        for (const p of item.points) {
          const mesh = sphere(p.style.size / 4, p.style.color, p.style.opacity);
          mesh.position.set(p.x, p.y, p.z);
          group.add(mesh);
        }
        scene.add(group);
        const camera = new THREE.PerspectiveCamera(45, 1, 1, 1000);
        camera.position.set(0, -150, 110);
        camera.lookAt(0, 0, 0);
        return { scene, camera, tick: () => { group.rotation.z += 0.01; } };
      }

      // Bohr shells seen face on; every electron advances by `speed` per frame.
      function shellScene(item) {
        const model = item.shells;
        const scene = new THREE.Scene();
        for (const shell of model.shells) {
          scene.add(circle(shell.radius, 0x808080));
        }
        scene.add(sphere(model.nucleus.radius, model.nucleus.color, 1));
        const label = labelSprite(model.nucleus.label);
        label.position.set(0, 0, model.nucleus.radius + 1);
        scene.add(label);

        const electrons = [];
        for (const shell of model.shells) {
          for (const angle of shell.electrons) {
            const mesh = sphere(model.electron_radius, "blue", 1);
            scene.add(mesh);
            electrons.push({ mesh, radius: shell.radius, angle });
          }
        }
        const outer = model.shells.length ? model.shells[model.shells.length - 1].radius : model.nucleus.radius;
        const camera = new THREE.PerspectiveCamera(45, 1, 1, 4000);
        camera.position.set(0, 0, (outer + 30) / Math.tan(THREE.MathUtils.degToRad(22.5)));
        camera.lookAt(0, 0, 0);
        const tick = (n) => {
          for (const e of electrons) {
            const a = e.angle + n * model.speed;
            e.mesh.position.set(e.radius * Math.cos(a), e.radius * Math.sin(a), 0);
          }
        };
        tick(0);
        return { scene, camera, tick };
      }

      function renderWorkspace(view) {
        lastView = view;
        for (const plot of plots) {
          disposeScene(plot.scene);
        }
        plots = [];
        workspaceEl.innerHTML = "";
        if (view.empty) {
          workspaceEl.style.display = "block";
          const placeholder = document.createElement("div");
          placeholder.className = "workspace";
          workspaceEl.appendChild(placeholder);
          statusEl.textContent = "Click an element to add it to the workspace.";
          return;
        }
        workspaceEl.style.display = "grid";
        statusEl.textContent = `${view.items.length} element(s) in the workspace.`;
        for (const item of view.items) {
          const box = document.createElement("div");
          box.className = "plot";
          const title = document.createElement("div");
          title.className = "plot-title";
          const swatch = document.createElement("span");
          swatch.className = "swatch";
          swatch.style.background = item.color;
          title.appendChild(swatch);
          title.appendChild(document.createTextNode(`${item.symbol} - ${item.points.length - 1} electron(s)`));
          const target = document.createElement("div");
          target.className = "plot-view";
          box.appendChild(title);
          box.appendChild(target);
          workspaceEl.appendChild(box);
          const built = viewMode === "ring" ? ringScene(item) : shellScene(item);
          plots.push(Object.assign({ target }, built));
        }
      }

      function animate() {
        const canvas = renderer.domElement;
        const w = canvas.clientWidth;
        const h = canvas.clientHeight;
        if (canvas.width !== Math.floor(w * renderer.getPixelRatio()) || canvas.height !== Math.floor(h * renderer.getPixelRatio())) {
          renderer.setSize(w, h, false);
        }
        renderer.setScissor(0, 0, w, h);
        renderer.clear();

        frame += 1;
        for (const plot of plots) {
          const rect = plot.target.getBoundingClientRect();
          if (rect.bottom < 0 || rect.top > h || rect.right < 0 || rect.left > w) {
            continue;
          }
          plot.tick(frame);
          const bottom = h - rect.bottom;
          renderer.setViewport(rect.left, bottom, rect.width, rect.height);
          renderer.setScissor(rect.left, bottom, rect.width, rect.height);
          plot.camera.aspect = rect.width / rect.height;
          plot.camera.updateProjectionMatrix();
          renderer.render(plot.scene, plot.camera);
        }
        requestAnimationFrame(animate);
      }

      document.getElementById("navHome").addEventListener("click", refreshWorkspace);
      document.getElementById("navClear").addEventListener("click", clearWorkspace);
      viewButton.addEventListener("click", () => {
        viewMode = viewMode === "ring" ? "shells" : "ring";
        viewButton.textContent = viewMode === "ring" ? "Shells" : "Ring";
        viewButton.classList.toggle("active", viewMode === "shells");
        renderWorkspace(lastView);
      });

      api("/api/catalog").then(buildPalette);
      refreshWorkspace();
      requestAnimationFrame(animate);
    </script>
  </body>
</html>
"##;

pub const LOGIN_HTML: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Atomic Visualizer - Login</title>
    <style>
      html, body { margin: 0; padding: 0; height: 100%; background: #0b0c10; color: #e6e6e6; font-family: "Space Grotesk", "Segoe UI", sans-serif; }
      .page { max-width: 640px; margin: 0 auto; padding: 24px; }
      .back { background: #11151b; border: 1px solid #2a2f36; color: #e6e6e6; border-radius: 8px; padding: 6px 10px; font-size: 12px; text-decoration: none; }
      .back:hover { border-color: #3c6a9e; }
      p { color: #c7cdd6; line-height: 1.6; }
    </style>
  </head>
  <body>
    <div class="page">
      <h2>Login</h2>
      <p>Accounts are not available. Your workspace lives for the length of this browser session.</p>
      <a class="back" href="/">Back to the workspace</a>
    </div>
  </body>
</html>
"##;
