//! The single form page, compiled in as a constant. Purely cosmetic apart
//! from the input constraints (min/step) and the submit wiring.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Car CO₂ Emission Predictor</title>
<style>
  body {
    background: linear-gradient(120deg, #f8ffae 0%, #43c6ac 100%);
    font-family: sans-serif;
    margin: 0;
  }
  .card {
    background: rgba(255,255,255,0.92);
    border-radius: 16px;
    padding: 2rem 2rem 1rem 2rem;
    margin: 2rem auto;
    max-width: 480px;
    box-shadow: 0 4px 24px rgba(0,0,0,0.07);
  }
  label {
    display: block;
    color: #000;
    font-weight: 600;
    margin-top: 0.8em;
  }
  input[type=number] {
    border-radius: 6px;
    border: 1px solid #43c6ac;
    padding: 0.4em 0.8em;
    font-size: 1.05em;
    width: 100%;
    box-sizing: border-box;
  }
  button {
    background: linear-gradient(90deg, #43c6ac 0%, #191654 100%);
    color: #fff;
    font-weight: bold;
    border-radius: 8px;
    border: none;
    font-size: 1.1em;
    padding: 0.5em 2em;
    margin-top: 1.2em;
    cursor: pointer;
  }
  #result { color: #000; font-size: 1.1em; margin-top: 1em; }
  #error { color: #b00020; margin-top: 1em; }
  footer {
    text-align: center;
    font-size: 1.05em;
    color: #222;
    border-top: 1px solid #bbb;
    margin-top: 2em;
    padding-top: 0.5em;
  }
</style>
</head>
<body>
<div class="card">
  <h1>🚗 Car CO₂ Emission Predictor</h1>
  <h3 style="color:#191654;">Estimate <b>CO₂ emissions (g/km)</b> using engine and fuel specifications.</h3>

  <label for="engine_size_l">Engine Size (L)</label>
  <input type="number" id="engine_size_l" min="0" step="0.1" value="0">

  <label for="cylinders">Number of Cylinders</label>
  <input type="number" id="cylinders" min="1" step="1" value="1">

  <label for="fuel_comb_l_per_100km">Fuel Consumption - Combined (L/100 km)</label>
  <input type="number" id="fuel_comb_l_per_100km" min="0" step="0.1" value="0">

  <label for="fuel_city_l_per_100km">Fuel Consumption - City (L/100 km)</label>
  <input type="number" id="fuel_city_l_per_100km" min="0" step="0.1" value="0">

  <label for="fuel_hwy_l_per_100km">Fuel Consumption - Highway (L/100 km)</label>
  <input type="number" id="fuel_hwy_l_per_100km" min="0" step="0.1" value="0">

  <button id="predict">Predict CO₂ Emission</button>

  <div id="result"></div>
  <div id="error"></div>

  <footer>
    A Project by <b>Nalgonda Lokesh</b><br>
    <a href="https://github.com/nalgondalokesh" target="_blank">GitHub</a> |
    <a href="https://www.linkedin.com/in/nalgondalokesh/" target="_blank">LinkedIn</a> |
    <a href="https://www.instagram.com/nalgondalokesh.ai/" target="_blank">Instagram</a>
  </footer>
</div>

<script>
document.getElementById("predict").addEventListener("click", async () => {
  const result = document.getElementById("result");
  const error = document.getElementById("error");
  result.textContent = "";
  error.textContent = "";

  const body = {
    engine_size_l: parseFloat(document.getElementById("engine_size_l").value),
    cylinders: parseInt(document.getElementById("cylinders").value, 10),
    fuel_comb_l_per_100km: parseFloat(document.getElementById("fuel_comb_l_per_100km").value),
    fuel_city_l_per_100km: parseFloat(document.getElementById("fuel_city_l_per_100km").value),
    fuel_hwy_l_per_100km: parseFloat(document.getElementById("fuel_hwy_l_per_100km").value)
  };

  try {
    const resp = await fetch("/predict", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(body)
    });
    const data = await resp.json();
    if (resp.ok) {
      result.innerHTML = "🚗 Estimated CO₂ Emissions: <b>" + data.display + "</b>";
    } else {
      error.textContent = data.error || ("prediction failed (HTTP " + resp.status + ")");
    }
  } catch (e) {
    error.textContent = "request failed: " + e;
  }
});
</script>
</body>
</html>
"#;
